// Library crate for the kart match tracker
// This file exposes the public API for integration tests

pub mod matches;
pub mod session;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use matches::{
    InMemoryMatchRepository, MatchDraft, MatchRecord, MatchRepository, MatchSubmission,
    PlayerStatEntry, Team, TeamSide, ValidationError,
};
pub use session::{TrackerSession, View};
pub use stats::{aggregate, Leaderboard, PlayerAggregate};
