use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::matches::MatchRecord;

use super::aggregate;

/// Cumulative performance of one player name across every recorded match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub name: String,
    pub total_points: u64,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub win_count: u32,
}

/// Medal for the top three leaderboard positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    /// Medal for a 1-based rank, `None` past third place
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Podium::Gold),
            2 => Some(Podium::Silver),
            3 => Some(Podium::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub podium: Option<Podium>,
    #[serde(flatten)]
    pub player: PlayerAggregate,
}

/// Ranked view over aggregated stats. Rank is purely positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        Self::from_ranked(aggregate(records))
    }

    /// Wraps an already sorted aggregate list
    pub fn from_ranked(players: Vec<PlayerAggregate>) -> Self {
        let entries = players
            .into_iter()
            .enumerate()
            .map(|(index, player)| LeaderboardEntry {
                rank: index + 1,
                podium: Podium::for_rank(index + 1),
                player,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// True when there is nothing to rank; display surfaces show a "no data" message instead
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn podium(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().filter(|entry| entry.podium.is_some())
    }

    pub fn find(&self, name: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|entry| entry.player.name == name)
    }
}
