//! Expected values computed straight from roster entries, independent of the aggregator
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::collections::HashSet;

use kart_tracker::MatchRecord;

/// Sums a player's points, kills and deaths straight from the roster entries
pub fn expected_totals(records: &[MatchRecord], name: &str) -> (u64, u64, u64) {
    records
        .iter()
        .flat_map(|record| [&record.team1, &record.team2])
        .flat_map(|team| team.players.iter())
        .filter(|entry| entry.name == name)
        .fold((0, 0, 0), |(points, kills, deaths), entry| {
            (
                points + u64::from(entry.points),
                kills + u64::from(entry.kills),
                deaths + u64::from(entry.deaths),
            )
        })
}

/// Number of matches in which the player is on the winning team
pub fn expected_wins(records: &[MatchRecord], name: &str) -> u32 {
    records
        .iter()
        .filter(|record| record.winning_team().has_player(name))
        .count() as u32
}

pub fn player_names(records: &[MatchRecord]) -> HashSet<String> {
    records
        .iter()
        .flat_map(|record| [&record.team1, &record.team2])
        .flat_map(|team| team.players.iter().map(|p| p.name.clone()))
        .collect()
}
