use thiserror::Error;

use super::models::TeamSide;

/// Reasons a submitted match is rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing team: {0}")]
    MissingTeam(TeamSide),

    #[error("Invalid winner '{0}', expected team1 or team2")]
    InvalidWinner(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Team name is empty: {0}")]
    EmptyTeamName(TeamSide),

    #[error("Player #{index} in {team} has an empty name")]
    EmptyPlayerName { team: TeamSide, index: usize },

    #[error("Negative {stat} ({value}) for player '{player}' in {team}")]
    NegativeStat {
        team: TeamSide,
        player: String,
        stat: &'static str,
        value: i64,
    },

    #[error("{stat} ({value}) for player '{player}' in {team} is out of range")]
    StatOutOfRange {
        team: TeamSide,
        player: String,
        stat: &'static str,
        value: i64,
    },
}
