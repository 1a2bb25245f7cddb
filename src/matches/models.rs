use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Which of the two teams in a match. Doubles as the declared winner, so a
/// record can only ever point at one of its own teams.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Team1 => TeamSide::Team2,
            TeamSide::Team2 => TeamSide::Team1,
        }
    }
}

/// Unique identifier assigned to a match record when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One player's performance within one team in one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatEntry {
    pub name: String,
    pub points: u32,
    pub kills: u32,
    pub deaths: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<PlayerStatEntry>,
}

impl Team {
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Names listed more than once in this roster, in order of their second appearance
    pub fn duplicate_player_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();

        for player in &self.players {
            let name = player.name.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }

        duplicates
    }
}

/// A completed match. Built only by validating a submission, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub date: NaiveDate,
    pub team1: Team,
    pub team2: Team,
    pub winner: TeamSide,
}

impl MatchRecord {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    /// Both teams in declaration order
    pub fn teams(&self) -> impl Iterator<Item = (TeamSide, &Team)> + '_ {
        TeamSide::iter().map(move |side| (side, self.team(side)))
    }

    pub fn winning_team(&self) -> &Team {
        self.team(self.winner)
    }

    pub fn losing_team(&self) -> &Team {
        self.team(self.winner.opponent())
    }

    /// Name of the winning team, as shown next to "Winner:" in the history list
    pub fn winner_label(&self) -> &str {
        &self.winning_team().name
    }

    /// Date formatted like "Jan 05, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }
}
