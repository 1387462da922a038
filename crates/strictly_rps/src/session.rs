//! Multi-round session engine.
//!
//! A [`Session`] plays up to N rounds between two players, keeps the
//! cumulative score and exposes the round history. It can be driven one
//! round at a time ([`Session::play_round`]) or as a batch
//! ([`Session::run_to_completion`]).

use crate::error::SessionError;
use crate::gesture::Selection;
use crate::players::Player;
use crate::round::RoundRecord;
use crate::rules::RoundOutcome;
use crate::summary::SessionSummary;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};

/// Number of rounds used when none is configured.
pub const DEFAULT_ROUNDS: usize = 10;

/// Label returned by [`Session::overall_winner`] on a tie.
pub const DRAW_LABEL: &str = "Draw";

/// Per-round notification: zero-based round index and the record just played.
pub type RoundCallback = Box<dyn FnMut(usize, &RoundRecord)>;

/// A fixed-length series of rounds between two players.
pub struct Session<F, S> {
    first: F,
    second: S,
    history: Vec<RoundRecord>,
    total_rounds: usize,
    first_score: usize,
    second_score: usize,
    draws: usize,
    running: bool,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    on_round: Option<RoundCallback>,
}

impl<F: Player, S: Player> Session<F, S> {
    /// Creates a session of `rounds` rounds.
    ///
    /// Fails with [`SessionError::ZeroRounds`] if `rounds` is zero.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: F, second: S, rounds: usize) -> Result<Self, SessionError> {
        if rounds == 0 {
            warn!("Rejected session with zero rounds");
            return Err(SessionError::ZeroRounds);
        }
        Ok(Self::build(first, second, rounds))
    }

    /// Creates a session of [`DEFAULT_ROUNDS`] rounds.
    pub fn with_default_rounds(first: F, second: S) -> Self {
        Self::build(first, second, DEFAULT_ROUNDS)
    }

    fn build(first: F, second: S, rounds: usize) -> Self {
        debug!(rounds, "Creating session");
        Self {
            first,
            second,
            history: Vec::with_capacity(rounds),
            total_rounds: rounds,
            first_score: 0,
            second_score: 0,
            draws: 0,
            running: false,
            started_at: None,
            ended_at: None,
            on_round: None,
        }
    }

    /// Plays a single round and returns its record.
    ///
    /// Asks the first player, then the second, for a gesture. Starts the
    /// clock if the session was not running and stops it after the last
    /// configured round.
    #[instrument(skip(self), fields(round = self.history.len() + 1, total = self.total_rounds))]
    pub fn play_round(&mut self) -> Result<RoundRecord, SessionError> {
        if self.history.len() >= self.total_rounds {
            warn!("Round requested after every round was played");
            return Err(SessionError::RoundsExhausted {
                total: self.total_rounds,
            });
        }

        if !self.running {
            self.mark_started();
        }

        let first = Selection::new(self.first.choose_gesture());
        let second = Selection::new(self.second.choose_gesture());
        let record = RoundRecord::new(first, second);

        let outcome = record.outcome();
        match outcome {
            RoundOutcome::FirstWins => self.first_score += 1,
            RoundOutcome::SecondWins => self.second_score += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
        self.history.push(record);
        let index = self.history.len() - 1;

        debug!(
            index,
            first = %record.first(),
            second = %record.second(),
            ?outcome,
            "Round played"
        );

        if let Some(callback) = self.on_round.as_mut() {
            callback(index, &record);
        }

        if self.history.len() >= self.total_rounds {
            self.mark_stopped();
        }

        #[cfg(debug_assertions)]
        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        Ok(record)
    }

    /// Plays every remaining round.
    ///
    /// Continues from the current position: rounds already in the history
    /// are kept, so calling this after [`Session::stop`] resumes the session.
    #[instrument(skip(self), fields(played = self.history.len(), total = self.total_rounds))]
    pub fn run_to_completion(&mut self) -> Result<(), SessionError> {
        self.mark_started();

        while self.running && self.history.len() < self.total_rounds {
            self.play_round()?;
        }

        self.mark_stopped();
        Ok(())
    }

    /// Stops the session, keeping every round already played.
    #[instrument(skip(self), fields(played = self.history.len()))]
    pub fn stop(&mut self) {
        self.mark_stopped();
    }

    /// Name of the player with more wins, or `"Draw"` on a tie.
    #[instrument(skip(self))]
    pub fn overall_winner(&self) -> &str {
        if self.first_score > self.second_score {
            self.first.name()
        } else if self.second_score > self.first_score {
            self.second.name()
        } else {
            DRAW_LABEL
        }
    }

    /// Registers the per-round callback, replacing any previous one.
    pub fn on_round_completed(&mut self, callback: impl FnMut(usize, &RoundRecord) + 'static) {
        self.on_round = Some(Box::new(callback));
    }

    /// Snapshot of the current totals.
    #[instrument(skip(self))]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(
            self.first.name().to_string(),
            self.second.name().to_string(),
            self.first_score,
            self.second_score,
            self.draws,
            self.history.len(),
            self.total_rounds,
            self.overall_winner().to_string(),
        )
    }

    /// The first player.
    pub fn first(&self) -> &F {
        &self.first
    }

    /// The second player.
    pub fn second(&self) -> &S {
        &self.second
    }

    /// Consumes the session and returns both players.
    pub fn into_players(self) -> (F, S) {
        (self.first, self.second)
    }

    fn mark_started(&mut self) {
        self.running = true;
        self.started_at = Some(Utc::now());
        info!(
            first = %self.first.name(),
            second = %self.second.name(),
            total = self.total_rounds,
            "Session running"
        );
    }

    fn mark_stopped(&mut self) {
        self.running = false;
        self.ended_at = Some(Utc::now());
        info!(
            played = self.history.len(),
            first_score = self.first_score,
            second_score = self.second_score,
            draws = self.draws,
            "Session stopped"
        );
    }
}

impl<F, S> Session<F, S> {
    /// Configured number of rounds.
    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Rounds completed so far.
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Rounds won by the first player.
    pub fn first_score(&self) -> usize {
        self.first_score
    }

    /// Rounds won by the second player.
    pub fn second_score(&self) -> usize {
        self.second_score
    }

    /// Drawn rounds.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Every round played so far, in order.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Returns true while the session is in progress.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// When the session last started running.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the session last stopped.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Wall-clock duration of the session.
    ///
    /// Measured against now while running, frozen between the recorded
    /// start and end once stopped, and zero if it never started.
    pub fn elapsed(&self) -> Duration {
        let Some(start) = self.started_at else {
            return Duration::ZERO;
        };
        let end = if self.running {
            Utc::now()
        } else {
            self.ended_at.unwrap_or(start)
        };
        (end - start).to_std().unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn set_draws(&mut self, draws: usize) {
        self.draws = draws;
    }
}

impl<F: Player, S: Player> std::fmt::Debug for Session<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("first", &self.first.name())
            .field("second", &self.second.name())
            .field("total_rounds", &self.total_rounds)
            .field("rounds_played", &self.history.len())
            .field("first_score", &self.first_score)
            .field("second_score", &self.second_score)
            .field("draws", &self.draws)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
