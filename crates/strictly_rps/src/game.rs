//! Lifecycle controller.
//!
//! [`Game`] owns both players and drives one [`Session`] at a time through
//! the Idle → Running → Finished lifecycle, reporting progress as text lines
//! to a single registered output sink.

use crate::error::SessionError;
use crate::output::Outlet;
use crate::phase::Phase;
use crate::players::Player;
use crate::round::RoundRecord;
use crate::rules::RoundOutcome;
use crate::session::{DRAW_LABEL, Session};
use tracing::{debug, info, instrument, warn};

/// Top-level controller for repeated sessions between two players.
///
/// Each new session receives its own clones of the two players, so no
/// player state is shared between sessions.
pub struct Game<F, S> {
    first: F,
    second: S,
    session: Option<Session<F, S>>,
    phase: Phase,
    outlet: Outlet,
}

impl<F, S> Game<F, S>
where
    F: Player + Clone + 'static,
    S: Player + Clone + 'static,
{
    /// Creates an idle game.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: F, second: S) -> Self {
        info!("Creating game");
        Self {
            first,
            second,
            session: None,
            phase: Phase::Idle,
            outlet: Outlet::default(),
        }
    }

    /// Replaces any previous session with a fresh one of `rounds` rounds.
    ///
    /// Moves the game to [`Phase::Running`] and emits a start line. With zero
    /// rounds the previous state is left untouched.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn new_session(&mut self, rounds: usize) -> Result<(), SessionError> {
        let mut session = Session::new(self.first.clone(), self.second.clone(), rounds)?;

        let outlet = self.outlet.clone();
        let first_name = self.first.name().to_string();
        let second_name = self.second.name().to_string();
        session.on_round_completed(move |index, record| {
            outlet.emit(&round_line(index, record, &first_name, &second_name));
        });

        if self.session.replace(session).is_some() {
            debug!("Discarded previous session");
        }
        self.phase = Phase::Running;
        info!(rounds, "New session started");

        self.outlet.emit(&format!("=== New Session ({} rounds) ===", rounds));
        Ok(())
    }

    /// Plays one round of the current session.
    ///
    /// After the last round the game moves to [`Phase::Finished`] and the
    /// summary block is emitted.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_single_round(&mut self) -> Result<RoundRecord, SessionError> {
        let session = match (self.phase, self.session.as_mut()) {
            (Phase::Running, Some(session)) => session,
            _ => {
                warn!("Round requested without an active session");
                return Err(SessionError::NoActiveSession);
            }
        };

        let record = session.play_round()?;

        if !session.is_running() {
            self.phase = Phase::Finished;
            let summary = session.summary();
            info!(winner = %summary.winner(), "Session finished");
            self.outlet.emit(&summary.to_string());
        }

        Ok(record)
    }

    /// Registers the output sink, replacing any previous one.
    pub fn set_output(&mut self, sink: impl FnMut(&str) + 'static) {
        self.outlet.set(Box::new(sink));
    }
}

impl<F, S> Game<F, S> {
    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current session, if one was ever started.
    pub fn current_session(&self) -> Option<&Session<F, S>> {
        self.session.as_ref()
    }

    /// The first player template.
    pub fn first(&self) -> &F {
        &self.first
    }

    /// The second player template.
    pub fn second(&self) -> &S {
        &self.second
    }
}

impl<F: Player, S: Player> std::fmt::Debug for Game<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("first", &self.first.name())
            .field("second", &self.second.name())
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("outlet", &self.outlet)
            .finish()
    }
}

/// Formats the display line for a finished round (index is zero-based).
///
/// The verdict names the winning player (`Alice wins`) rather than a fixed
/// "User Wins"/"Computer Wins" label.
fn round_line(index: usize, record: &RoundRecord, first_name: &str, second_name: &str) -> String {
    let verdict = match record.outcome() {
        RoundOutcome::FirstWins => format!("{} wins", first_name),
        RoundOutcome::SecondWins => format!("{} wins", second_name),
        RoundOutcome::Draw => DRAW_LABEL.to_string(),
    };
    format!(
        "Round {}: {} vs {} -> {}",
        index + 1,
        record.first(),
        record.second(),
        verdict
    )
}
