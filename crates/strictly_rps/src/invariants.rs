//! Session invariants.
//!
//! Invariants are logical properties that must hold after every round.
//! They are checked in debug builds and can be tested independently.

use crate::players::Player;
use crate::session::Session;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Wins, losses and draws add up to the rounds played.
pub struct ScoreConservation;

impl<F: Player, S: Player> Invariant<Session<F, S>> for ScoreConservation {
    fn holds(session: &Session<F, S>) -> bool {
        session.first_score() + session.second_score() + session.draws() == session.rounds_played()
    }

    fn description() -> &'static str {
        "first score + second score + draws must equal rounds played"
    }
}

/// Never more rounds in the history than were configured.
pub struct HistoryWithinLimit;

impl<F: Player, S: Player> Invariant<Session<F, S>> for HistoryWithinLimit {
    fn holds(session: &Session<F, S>) -> bool {
        session.rounds_played() <= session.total_rounds()
    }

    fn description() -> &'static str {
        "rounds played must not exceed the configured round count"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (ScoreConservation, HistoryWithinLimit);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Gesture;
    use crate::players::ScriptedPlayer;

    fn session(rounds: usize) -> Session<ScriptedPlayer, ScriptedPlayer> {
        Session::new(
            ScriptedPlayer::new("A", vec![Gesture::Rock, Gesture::Paper, Gesture::Scissors])
                .unwrap(),
            ScriptedPlayer::fixed("B", Gesture::Rock),
            rounds,
        )
        .unwrap()
    }

    #[test]
    fn test_invariants_hold_for_fresh_session() {
        assert!(SessionInvariants::check_all(&session(3)).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_every_round() {
        let mut session = session(6);
        while session.rounds_played() < session.total_rounds() {
            session.play_round().unwrap();
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_corrupted_score_detected() {
        let mut session = session(2);
        session.play_round().unwrap();
        session.set_draws(5);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].description.contains("draws"));
    }
}
