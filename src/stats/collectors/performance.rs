use crate::matches::MatchRecord;

use super::super::{CollectedData, StatCollector};

/// Emits one `Performance` item per roster entry on both teams
pub struct PerformanceCollector;

impl Default for PerformanceCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for PerformanceCollector {
    fn collect(&self, record: &MatchRecord) -> Vec<CollectedData> {
        record
            .teams()
            .flat_map(|(_, team)| team.players.iter())
            .map(|entry| CollectedData::Performance {
                player: entry.name.clone(),
                points: entry.points,
                kills: entry.kills,
                deaths: entry.deaths,
            })
            .collect()
    }
}
