//! Human player driven by an injected input function.

use super::Player;
use crate::gesture::Gesture;
use tracing::{debug, info};

/// Human player whose gestures come from the front-end.
///
/// The input function is responsible for reading and validating raw input;
/// it only ever hands back a valid [`Gesture`].
#[derive(Clone)]
pub struct HumanPlayer<F> {
    name: String,
    input: F,
}

impl<F> HumanPlayer<F>
where
    F: FnMut() -> Gesture,
{
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: F) -> Self {
        let name = name.into();
        info!(name = %name, "Creating human player");
        Self { name, input }
    }
}

impl<F> Player for HumanPlayer<F>
where
    F: FnMut() -> Gesture,
{
    fn choose_gesture(&mut self) -> Gesture {
        let gesture = (self.input)();
        debug!(player = %self.name, %gesture, "Human chose gesture");
        gesture
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for HumanPlayer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanPlayer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
