//! Round evaluation.

use super::gesture::{Gesture, dominates};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a single round, from the first player's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The first player's gesture won.
    FirstWins,
    /// The second player's gesture won.
    SecondWins,
    /// Both players showed the same gesture.
    Draw,
}

impl RoundOutcome {
    /// Returns the outcome seen from the other seat.
    #[instrument]
    pub fn flipped(self) -> Self {
        match self {
            RoundOutcome::FirstWins => RoundOutcome::SecondWins,
            RoundOutcome::SecondWins => RoundOutcome::FirstWins,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    /// Seat-relative label.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            RoundOutcome::FirstWins => "First Wins",
            RoundOutcome::SecondWins => "Second Wins",
            RoundOutcome::Draw => "Draw",
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, RoundOutcome::Draw)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decides a round between two gestures.
///
/// Total over all nine pairs: equal gestures draw, otherwise whichever
/// gesture dominates the other wins.
#[instrument]
pub fn evaluate(first: Gesture, second: Gesture) -> RoundOutcome {
    if first == second {
        RoundOutcome::Draw
    } else if dominates(first, second) {
        RoundOutcome::FirstWins
    } else {
        RoundOutcome::SecondWins
    }
}
