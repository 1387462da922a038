//! Hand gestures and the fixed dominance cycle.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three hand shapes.
///
/// Each gesture beats exactly one other and loses to exactly one other:
///
/// | gesture  | beats    |
/// |----------|----------|
/// | Rock     | Scissors |
/// | Scissors | Paper    |
/// | Paper    | Rock     |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Gesture {
    /// Rock (index 0).
    #[default]
    Rock,
    /// Scissors (index 1).
    Scissors,
    /// Paper (index 2).
    Paper,
}

impl Gesture {
    /// All three gestures in index order.
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Scissors, Gesture::Paper];

    /// Human-readable name.
    #[instrument]
    pub fn display_name(self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Scissors => "Scissors",
            Gesture::Paper => "Paper",
        }
    }

    /// Position in the dominance cycle (0-2).
    #[instrument]
    pub fn index(self) -> u8 {
        match self {
            Gesture::Rock => 0,
            Gesture::Scissors => 1,
            Gesture::Paper => 2,
        }
    }

    /// Creates a gesture from its cycle position.
    #[instrument]
    pub fn from_index(index: u8) -> Result<Self, GestureError> {
        match index {
            0 => Ok(Gesture::Rock),
            1 => Ok(Gesture::Scissors),
            2 => Ok(Gesture::Paper),
            other => Err(GestureError::InvalidIndex(other)),
        }
    }

    /// The gesture this one beats.
    #[instrument]
    pub fn beats(self) -> Self {
        Self::ALL[usize::from((self.index() + 1) % 3)]
    }

    /// The gesture that beats this one.
    #[instrument]
    pub fn beaten_by(self) -> Self {
        Self::ALL[usize::from((self.index() + 2) % 3)]
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<u8> for Gesture {
    type Error = GestureError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Returns true iff `attacker` beats `defender`.
#[instrument]
pub fn dominates(attacker: Gesture, defender: Gesture) -> bool {
    attacker.beats() == defender
}

/// A slot that always holds exactly one gesture.
///
/// Starts as [`Gesture::Rock`] unless given an explicit gesture and can be
/// overwritten in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    gesture: Gesture,
}

impl Selection {
    /// Creates a selection holding `gesture`.
    pub fn new(gesture: Gesture) -> Self {
        Self { gesture }
    }

    /// Returns the held gesture.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Overwrites the held gesture.
    pub fn set(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }
}

impl From<Gesture> for Selection {
    fn from(gesture: Gesture) -> Self {
        Self::new(gesture)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.gesture)
    }
}

/// Error converting a raw value into a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GestureError {
    /// The index is outside 0-2.
    #[display("Invalid gesture index {} (expected 0-2)", _0)]
    InvalidIndex(u8),
}

impl std::error::Error for GestureError {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dominance_is_total_and_antisymmetric() {
        for a in Gesture::iter() {
            for b in Gesture::iter() {
                if a == b {
                    assert!(!dominates(a, b), "{a} must not beat itself");
                } else {
                    assert!(
                        dominates(a, b) ^ dominates(b, a),
                        "exactly one of {a}/{b} must win"
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_gesture_beats_exactly_one() {
        for a in Gesture::iter() {
            let wins = Gesture::iter().filter(|&b| dominates(a, b)).count();
            let losses = Gesture::iter().filter(|&b| dominates(b, a)).count();
            assert_eq!(wins, 1);
            assert_eq!(losses, 1);
        }
    }

    #[test]
    fn test_canonical_table() {
        assert!(dominates(Gesture::Rock, Gesture::Scissors));
        assert!(dominates(Gesture::Scissors, Gesture::Paper));
        assert!(dominates(Gesture::Paper, Gesture::Rock));
        assert_eq!(Gesture::Rock.beaten_by(), Gesture::Paper);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Gesture::Rock.to_string(), "Rock");
        assert_eq!(Gesture::Scissors.to_string(), "Scissors");
        assert_eq!(Gesture::Paper.to_string(), "Paper");
    }

    #[test]
    fn test_index_round_trip_and_out_of_range() {
        for g in Gesture::ALL {
            assert_eq!(Gesture::from_index(g.index()), Ok(g));
        }
        assert_eq!(Gesture::try_from(3u8), Err(GestureError::InvalidIndex(3)));
        assert!(Gesture::from_index(255).is_err());
    }

    #[test]
    fn test_selection_defaults_to_rock_and_overwrites() {
        let mut selection = Selection::default();
        assert_eq!(selection.gesture(), Gesture::Rock);

        selection.set(Gesture::Paper);
        assert_eq!(selection.gesture(), Gesture::Paper);
        assert_eq!(selection, Selection::new(Gesture::Paper));
        assert_ne!(selection, Selection::from(Gesture::Scissors));
    }
}
