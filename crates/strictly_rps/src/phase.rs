//! Lifecycle phases of the game controller.

use serde::{Deserialize, Serialize};

/// Coarse state of a [`Game`](crate::Game).
///
/// Distinct from a session's own running flag: the phase only changes
/// through controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No session has been started yet.
    #[default]
    Idle,
    /// A session is in progress.
    Running,
    /// The last session has ended and its results are available.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Running => write!(f, "Running"),
            Phase::Finished => write!(f, "Finished"),
        }
    }
}
