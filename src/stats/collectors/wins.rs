use std::collections::HashSet;

use crate::matches::MatchRecord;

use super::super::{CollectedData, StatCollector};

/// Emits one `Win` per unique player name on the winning team.
/// A name listed twice in the winning roster still wins the match once.
pub struct WinCollector;

impl Default for WinCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl WinCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for WinCollector {
    fn collect(&self, record: &MatchRecord) -> Vec<CollectedData> {
        let mut seen = HashSet::new();

        record
            .winning_team()
            .players
            .iter()
            .filter(|entry| seen.insert(entry.name.as_str()))
            .map(|entry| CollectedData::Win {
                player: entry.name.clone(),
            })
            .collect()
    }
}
