//! End-of-session summary.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Snapshot of a session's totals.
///
/// The [`Display`](std::fmt::Display) block names both players and the
/// winner by name instead of fixed "User"/"Computer" labels, and starts
/// directly at the `=== Session Over ===` header with no leading blank line.
/// Front-ends add their own spacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct SessionSummary {
    /// Name of the first player.
    first_name: String,
    /// Name of the second player.
    second_name: String,
    /// Rounds won by the first player.
    first_score: usize,
    /// Rounds won by the second player.
    second_score: usize,
    /// Drawn rounds.
    draws: usize,
    /// Rounds completed.
    rounds_played: usize,
    /// Rounds configured.
    total_rounds: usize,
    /// Winner's name, or "Draw".
    winner: String,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Session Over ===")?;
        writeln!(f, "{}: {} wins", self.first_name, self.first_score)?;
        writeln!(f, "{}: {} wins", self.second_name, self.second_score)?;
        writeln!(f, "Draws: {}", self.draws)?;
        write!(f, "Winner: {}", self.winner)
    }
}
