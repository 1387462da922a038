//! Scripted player that replays a fixed sequence.

use super::Player;
use crate::gesture::Gesture;
use tracing::{debug, instrument, warn};

/// Player that cycles through a fixed list of gestures.
///
/// Useful for replays, demos and deterministic tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPlayer {
    name: String,
    script: Vec<Gesture>,
    cursor: usize,
}

impl ScriptedPlayer {
    /// Creates a player that plays `script` in order, wrapping around.
    ///
    /// Fails with [`ScriptError::Empty`] if `script` has no gestures.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, script: Vec<Gesture>) -> Result<Self, ScriptError> {
        if script.is_empty() {
            warn!("Rejected empty script");
            return Err(ScriptError::Empty);
        }
        Ok(Self::build(name.into(), script))
    }

    /// Creates a player that always shows the same gesture.
    pub fn fixed(name: impl Into<String>, gesture: Gesture) -> Self {
        Self::build(name.into(), vec![gesture])
    }

    fn build(name: String, script: Vec<Gesture>) -> Self {
        Self {
            name,
            script,
            cursor: 0,
        }
    }

    /// Number of gestures played so far.
    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl Player for ScriptedPlayer {
    fn choose_gesture(&mut self) -> Gesture {
        let gesture = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        debug!(player = %self.name, %gesture, turn = self.cursor, "Scripted gesture");
        gesture
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Error building a scripted player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ScriptError {
    /// The script has no gestures to play.
    #[display("Script must contain at least one gesture")]
    Empty,
}

impl std::error::Error for ScriptError {}
