use kart_tracker::{
    matches::{PlayerSubmission, TeamSubmission},
    InMemoryMatchRepository, MatchRecord, MatchRepository, MatchSubmission,
};

// ============================================================================
// Match Setup Utilities
// ============================================================================

pub struct MatchBuilder {
    date: String,
    team1: Option<TeamSubmission>,
    team2: Option<TeamSubmission>,
    winner: String,
}

#[allow(dead_code)]
impl MatchBuilder {
    pub fn new() -> Self {
        Self {
            date: "2025-01-05".to_string(),
            team1: None,
            team2: None,
            winner: "team1".to_string(),
        }
    }

    /// The single-match scenario: Alex (Red) beats John (Blue)
    pub fn with_red_beats_blue(self) -> Self {
        self.team1("Red", &[("Alex", 100, 5, 2)])
            .team2("Blue", &[("John", 90, 5, 3)])
            .winner("team1")
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn team1(mut self, name: &str, players: &[(&str, i64, i64, i64)]) -> Self {
        self.team1 = Some(team(name, players));
        self
    }

    pub fn team2(mut self, name: &str, players: &[(&str, i64, i64, i64)]) -> Self {
        self.team2 = Some(team(name, players));
        self
    }

    pub fn winner(mut self, winner: &str) -> Self {
        self.winner = winner.to_string();
        self
    }

    pub fn build(self) -> MatchSubmission {
        MatchSubmission {
            date: self.date,
            team1: self.team1,
            team2: self.team2,
            winner: self.winner,
        }
    }

    /// Appends to the repository, panicking if the submission is invalid
    pub fn record_into(self, repo: &mut InMemoryMatchRepository) -> MatchRecord {
        repo.append(&self.build())
            .expect("builder submission should be valid")
    }
}

fn team(name: &str, players: &[(&str, i64, i64, i64)]) -> TeamSubmission {
    TeamSubmission {
        name: name.to_string(),
        players: players
            .iter()
            .map(|(player, points, kills, deaths)| {
                PlayerSubmission::new(*player, *points, *kills, *deaths)
            })
            .collect(),
    }
}
