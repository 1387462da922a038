//! Round records.
//!
//! A round is a domain event: the two selections shown in one exchange.
//! The outcome is never stored, it is recomputed from the selections.

use super::gesture::Selection;
use super::rules::{RoundOutcome, evaluate};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The two selections shown in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct RoundRecord {
    first: Selection,
    second: Selection,
}

impl RoundRecord {
    /// The first player's selection.
    pub fn first(&self) -> Selection {
        self.first
    }

    /// The second player's selection.
    pub fn second(&self) -> Selection {
        self.second
    }

    /// Evaluates who won this round.
    #[instrument]
    pub fn outcome(&self) -> RoundOutcome {
        evaluate(self.first.gesture(), self.second.gesture())
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {} -> {}", self.first, self.second, self.outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Gesture;

    #[test]
    fn test_outcome_is_derived_from_selections() {
        let record = RoundRecord::new(Gesture::Paper.into(), Gesture::Rock.into());
        assert_eq!(record.outcome(), RoundOutcome::FirstWins);
        assert_eq!(record.first().gesture(), Gesture::Paper);
        assert_eq!(record.second().gesture(), Gesture::Rock);
    }

    #[test]
    fn test_display() {
        let record = RoundRecord::new(Gesture::Rock.into(), Gesture::Rock.into());
        assert_eq!(record.to_string(), "Rock vs Rock -> Draw");
    }

    #[test]
    fn test_serde_round_trip() {
        let record = RoundRecord::new(Gesture::Scissors.into(), Gesture::Paper.into());
        let json = serde_json::to_string(&record).unwrap();
        let back: RoundRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
