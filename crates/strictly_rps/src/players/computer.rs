//! Computer player that picks uniformly at random.

use super::Player;
use crate::gesture::Gesture;
use rand::Rng;
use tracing::{debug, instrument};

/// Name used when none is given.
pub const DEFAULT_COMPUTER_NAME: &str = "Computer";

/// Computer opponent choosing a random gesture each round.
///
/// Draws from the thread-local generator, so each thread gets its own
/// independently seeded stream and no state is shared between players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_COMPUTER_NAME)
    }
}

impl Player for ComputerPlayer {
    fn choose_gesture(&mut self) -> Gesture {
        let index = rand::thread_rng().gen_range(0..Gesture::ALL.len());
        let gesture = Gesture::ALL[index];
        debug!(ai = %self.name, %gesture, "Computer chose gesture");
        gesture
    }

    fn name(&self) -> &str {
        &self.name
    }
}
