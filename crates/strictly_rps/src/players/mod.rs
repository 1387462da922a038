//! Player trait and implementations.

mod computer;
mod human;
mod scripted;

pub use computer::{ComputerPlayer, DEFAULT_COMPUTER_NAME};
pub use human::HumanPlayer;
pub use scripted::{ScriptError, ScriptedPlayer};

use crate::gesture::Gesture;

/// A source of gestures for one seat of a session.
pub trait Player {
    /// Chooses the gesture for the current round.
    ///
    /// Called exactly once per round.
    fn choose_gesture(&mut self) -> Gesture;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn choose_gesture(&mut self) -> Gesture {
        (**self).choose_gesture()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
