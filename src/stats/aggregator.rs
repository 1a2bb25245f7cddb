use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::matches::MatchRecord;

use super::{
    collectors::{PerformanceCollector, WinCollector},
    CollectedData, PlayerAggregate, StatCollector,
};

/// Folds match records into a ranked list of per-player totals.
///
/// Records are assumed to have passed store validation already.
pub fn aggregate(records: &[MatchRecord]) -> Vec<PlayerAggregate> {
    Aggregator::new().aggregate(records)
}

pub struct Aggregator {
    collectors: Vec<Box<dyn StatCollector>>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            collectors: vec![
                Box::new(PerformanceCollector::new()),
                Box::new(WinCollector::new()),
            ],
        }
    }

    pub fn with_collector(mut self, collector: Box<dyn StatCollector>) -> Self {
        self.collectors.push(collector);
        self
    }

    /// Accumulator map is local to each call so repeated calls on the same
    /// input produce identical output.
    pub fn aggregate(&self, records: &[MatchRecord]) -> Vec<PlayerAggregate> {
        let mut players: HashMap<String, PlayerAggregate> = HashMap::new();

        for record in records {
            for collector in &self.collectors {
                for data in collector.collect(record) {
                    let stats = players
                        .entry(data.player().to_string())
                        .or_insert_with(|| PlayerAggregate {
                            name: data.player().to_string(),
                            ..PlayerAggregate::default()
                        });

                    match data {
                        CollectedData::Performance {
                            points,
                            kills,
                            deaths,
                            ..
                        } => {
                            stats.total_points += u64::from(points);
                            stats.total_kills += u64::from(kills);
                            stats.total_deaths += u64::from(deaths);
                        }
                        CollectedData::Win { .. } => stats.win_count += 1,
                    }
                }
            }
        }

        let mut ranked: Vec<PlayerAggregate> = players.into_values().collect();
        ranked.sort_by(rank_order);

        debug!(
            matches = records.len(),
            players = ranked.len(),
            "Aggregated player stats"
        );
        ranked
    }
}

/// Points descending, then name ascending so ties are deterministic
fn rank_order(a: &PlayerAggregate, b: &PlayerAggregate) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| a.name.cmp(&b.name))
}
