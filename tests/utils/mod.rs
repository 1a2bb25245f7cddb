pub mod expectations;
pub mod match_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use expectations::{expected_totals, expected_wins, player_names};
pub use match_builders::MatchBuilder;
