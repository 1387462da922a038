//! Strictly RPS - rock-scissors-paper rules and session engine
//!
//! Pure game logic with no I/O: front-ends inject the human player's input
//! and receive progress as text lines.
//!
//! # Architecture
//!
//! - **Gesture**: the three hand shapes and their dominance cycle
//! - **Rules**: round evaluation
//! - **Players**: gesture sources (human input, random computer, scripted)
//! - **Session**: fixed-length series of rounds with scoring
//! - **Game**: Idle/Running/Finished lifecycle over repeated sessions
//!
//! # Example
//!
//! ```
//! use strictly_rps::{ComputerPlayer, Game, Gesture, HumanPlayer, Phase};
//!
//! let human = HumanPlayer::new("Alice", || Gesture::Rock);
//! let mut game = Game::new(human, ComputerPlayer::default());
//! game.set_output(|line| println!("{line}"));
//!
//! game.new_session(3)?;
//! while game.phase() == Phase::Running {
//!     game.play_single_round()?;
//! }
//! # Ok::<(), strictly_rps::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod gesture;
mod invariants;
mod output;
mod phase;
mod players;
mod round;
mod rules;
mod session;
mod summary;

// Crate-level exports - Gestures and rules
pub use gesture::{Gesture, GestureError, Selection, dominates};
pub use round::RoundRecord;
pub use rules::{RoundOutcome, evaluate};

// Crate-level exports - Players
pub use players::{
    ComputerPlayer, DEFAULT_COMPUTER_NAME, HumanPlayer, Player, ScriptError, ScriptedPlayer,
};

// Crate-level exports - Sessions
pub use error::SessionError;
pub use invariants::{
    HistoryWithinLimit, Invariant, InvariantSet, InvariantViolation, ScoreConservation,
    SessionInvariants,
};
pub use session::{DEFAULT_ROUNDS, DRAW_LABEL, RoundCallback, Session};
pub use summary::SessionSummary;

// Crate-level exports - Lifecycle
pub use game::Game;
pub use output::OutputSink;
pub use phase::Phase;
