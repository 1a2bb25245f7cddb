use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use super::errors::ValidationError;
use super::models::{MatchId, MatchRecord, PlayerStatEntry, Team, TeamSide};

/// Match data as it arrives from the entry form: loosely typed and unchecked.
/// The store turns it into a `MatchRecord` via [`MatchSubmission::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSubmission {
    pub date: String,
    pub team1: Option<TeamSubmission>,
    pub team2: Option<TeamSubmission>,
    pub winner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSubmission {
    pub name: String,
    #[serde(default)]
    pub players: Vec<PlayerSubmission>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSubmission {
    pub name: String,
    pub points: i64,
    pub kills: i64,
    pub deaths: i64,
}

impl PlayerSubmission {
    pub fn new(name: impl Into<String>, points: i64, kills: i64, deaths: i64) -> Self {
        Self {
            name: name.into(),
            points,
            kills,
            deaths,
        }
    }
}

impl MatchSubmission {
    /// Checks every data model invariant and builds the record, assigning a fresh id.
    pub fn validate(&self) -> Result<MatchRecord, ValidationError> {
        let winner = TeamSide::from_str(self.winner.trim())
            .map_err(|_| ValidationError::InvalidWinner(self.winner.clone()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;

        let team1 = validate_team(TeamSide::Team1, self.team1.as_ref())?;
        let team2 = validate_team(TeamSide::Team2, self.team2.as_ref())?;

        Ok(MatchRecord {
            id: MatchId::new(),
            date,
            team1,
            team2,
            winner,
        })
    }
}

fn validate_team(side: TeamSide, team: Option<&TeamSubmission>) -> Result<Team, ValidationError> {
    let team = team.ok_or(ValidationError::MissingTeam(side))?;

    if team.name.trim().is_empty() {
        return Err(ValidationError::EmptyTeamName(side));
    }

    let mut players = Vec::with_capacity(team.players.len());

    // Names are kept exactly as typed; aggregation keys on exact equality
    for (index, player) in team.players.iter().enumerate() {
        if player.name.trim().is_empty() {
            return Err(ValidationError::EmptyPlayerName { team: side, index });
        }

        players.push(PlayerStatEntry {
            name: player.name.clone(),
            points: stat_value(side, &player.name, "points", player.points)?,
            kills: stat_value(side, &player.name, "kills", player.kills)?,
            deaths: stat_value(side, &player.name, "deaths", player.deaths)?,
        });
    }

    let team = Team {
        name: team.name.clone(),
        players,
    };

    for player in team.duplicate_player_names() {
        // Kept, but wins for this name are only counted once per match
        warn!(team = %side, player = %player, "Duplicate player name in roster");
    }

    Ok(team)
}

fn stat_value(
    team: TeamSide,
    player: &str,
    stat: &'static str,
    value: i64,
) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeStat {
            team,
            player: player.to_string(),
            stat,
            value,
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::StatOutOfRange {
        team,
        player: player.to_string(),
        stat,
        value,
    })
}
