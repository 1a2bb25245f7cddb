pub mod aggregator;
pub mod collectors;
pub mod models;

pub use aggregator::{aggregate, Aggregator};
pub use models::*;

use crate::matches::MatchRecord;

/// A single observation pulled out of one match record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectedData {
    Performance {
        player: String,
        points: u32,
        kills: u32,
        deaths: u32,
    },
    Win {
        player: String,
    },
}

impl CollectedData {
    pub fn player(&self) -> &str {
        match self {
            CollectedData::Performance { player, .. } => player,
            CollectedData::Win { player } => player,
        }
    }
}

/// Extracts per-player data from a match. Collectors must be pure: the same
/// record always yields the same data.
pub trait StatCollector {
    fn collect(&self, record: &MatchRecord) -> Vec<CollectedData>;
}
