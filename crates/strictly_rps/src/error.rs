//! Session error types.

/// Error raised when a session or game is driven incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Every configured round has already been played.
    #[display("All {} rounds have already been played", total)]
    RoundsExhausted {
        /// Configured round count.
        total: usize,
    },

    /// No session has been started, or the current one is over.
    #[display("No active session")]
    NoActiveSession,

    /// A session needs at least one round.
    #[display("Round count must be positive")]
    ZeroRounds,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}
