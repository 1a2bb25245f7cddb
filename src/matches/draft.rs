use chrono::Utc;

use super::{MatchSubmission, PlayerSubmission, TeamSide, TeamSubmission};

pub const DEFAULT_TEAM1_NAME: &str = "Red Team";
pub const DEFAULT_TEAM2_NAME: &str = "Blue Team";

const DEFAULT_TEAM1_ROSTER: [(&str, i64, i64, i64); 3] =
    [("Alex", 100, 5, 2), ("Sarah", 85, 4, 3), ("Mike", 95, 6, 4)];
const DEFAULT_TEAM2_ROSTER: [(&str, i64, i64, i64); 3] =
    [("John", 90, 5, 3), ("Emma", 110, 7, 2), ("Chris", 80, 4, 5)];

/// Editable state of the match entry form.
///
/// Holds raw input, nothing is checked until the draft is submitted to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDraft {
    date: String,
    team1: TeamSubmission,
    team2: TeamSubmission,
    winner: String,
}

impl Default for MatchDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchDraft {
    /// A fresh form: today's date, the sample rosters and team 1 selected as winner
    pub fn new() -> Self {
        Self {
            date: today(),
            team1: sample_team(DEFAULT_TEAM1_NAME, &DEFAULT_TEAM1_ROSTER),
            team2: sample_team(DEFAULT_TEAM2_NAME, &DEFAULT_TEAM2_ROSTER),
            winner: TeamSide::Team1.to_string(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn winner(&self) -> &str {
        &self.winner
    }

    pub fn team(&self, side: TeamSide) -> &TeamSubmission {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut TeamSubmission {
        match side {
            TeamSide::Team1 => &mut self.team1,
            TeamSide::Team2 => &mut self.team2,
        }
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn set_winner(&mut self, winner: impl Into<String>) {
        self.winner = winner.into();
    }

    pub fn set_team_name(&mut self, side: TeamSide, name: impl Into<String>) {
        self.team_mut(side).name = name.into();
    }

    /// Appends a blank row to the team's roster and returns its index
    pub fn add_player(&mut self, side: TeamSide) -> usize {
        let players = &mut self.team_mut(side).players;
        players.push(PlayerSubmission::default());
        players.len() - 1
    }

    pub fn player_mut(&mut self, side: TeamSide, index: usize) -> Option<&mut PlayerSubmission> {
        self.team_mut(side).players.get_mut(index)
    }

    pub fn to_submission(&self) -> MatchSubmission {
        MatchSubmission {
            date: self.date.clone(),
            team1: Some(self.team1.clone()),
            team2: Some(self.team2.clone()),
            winner: self.winner.clone(),
        }
    }

    /// Clears both rosters after a successful submit. The winner selection is kept.
    pub fn reset(&mut self) {
        self.date = today();
        self.team1 = empty_team(DEFAULT_TEAM1_NAME);
        self.team2 = empty_team(DEFAULT_TEAM2_NAME);
    }
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

fn empty_team(name: &str) -> TeamSubmission {
    TeamSubmission {
        name: name.to_string(),
        players: Vec::new(),
    }
}

fn sample_team(name: &str, roster: &[(&str, i64, i64, i64)]) -> TeamSubmission {
    TeamSubmission {
        name: name.to_string(),
        players: roster
            .iter()
            .map(|(player, points, kills, deaths)| {
                PlayerSubmission::new(*player, *points, *kills, *deaths)
            })
            .collect(),
    }
}
