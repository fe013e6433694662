//! Round controller and state management.

use core::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::sync::Mutex;

use crate::gesture::Move;
use crate::opponent::{Opponent, SeededOpponent};
use crate::options::RoundOptions;
use crate::result::{Outcome, RoundResult, ScoreBoard};

mod capture;
mod countdown;
pub mod state;

pub(crate) use state::RoundState;
pub use state::{FrameOutcome, RoundEpoch, RoundPhase, RoundSnapshot, TickOutcome};

/// A stone/paper/scissors round controller.
///
/// The controller owns the countdown, the capture gate, the last resolved
/// round and the session scores. It is driven by two event sources: a
/// periodic timer calling [`tick`](Self::tick) and a capture adapter calling
/// [`submit_frame`](Self::submit_frame). Use [`RoundOptions`] to configure
/// the countdown.
pub struct RoundController<O = SeededOpponent> {
    /// Round options.
    pub options: RoundOptions,
    /// Current round state.
    state: Mutex<RoundState>,
    /// Capture gate. `true` while frames must be discarded.
    locked: AtomicBool,
    /// Session scores.
    scores: Mutex<ScoreBoard>,
    /// Source of computer moves.
    opponent: Mutex<O>,
}

impl RoundController<SeededOpponent> {
    /// Creates a new controller whose opponent draws from the given seed.
    ///
    /// The first round's countdown starts immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::{RoundController, RoundOptions, RoundPhase};
    ///
    /// let controller = RoundController::new(RoundOptions::default(), 42);
    /// assert_eq!(controller.phase(), RoundPhase::Countdown);
    /// assert_eq!(controller.countdown(), 3);
    /// assert!(controller.is_locked());
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self::with_opponent(options, SeededOpponent::new(seed))
    }
}

impl<O: Opponent> RoundController<O> {
    /// Creates a new controller with a custom opponent.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::{Move, RoundController, RoundOptions};
    ///
    /// let controller = RoundController::with_opponent(RoundOptions::default(), || Move::Paper);
    /// let _ = controller;
    /// ```
    #[must_use]
    pub fn with_opponent(options: RoundOptions, opponent: O) -> Self {
        let controller = Self {
            options,
            state: Mutex::new(RoundState::default()),
            locked: AtomicBool::new(true),
            scores: Mutex::new(ScoreBoard::default()),
            opponent: Mutex::new(opponent),
        };
        controller.enter_countdown(&mut controller.state.lock());
        controller
    }

    /// Starts a new session.
    ///
    /// Zeroes both scores, clears the last round and restarts the countdown.
    /// Returns the epoch of the new countdown timer; any timer armed for an
    /// earlier epoch is stale from now on.
    pub fn reset(&self) -> RoundEpoch {
        let mut state = self.state.lock();
        {
            let mut scores = self.scores.lock();
            *scores = ScoreBoard::default();
        }
        state.last = None;
        debug!("session reset");
        self.enter_countdown(&mut state)
    }

    /// Enters the countdown phase for a new round.
    fn enter_countdown(&self, state: &mut RoundState) -> RoundEpoch {
        self.locked.store(true, Ordering::Release);

        let from = self.options.countdown_from;
        state.epoch = state.epoch.next();
        state.phase = RoundPhase::Countdown;
        state.can_capture = false;
        state.countdown = from;
        state.countdown_word = self.countdown_word_for(from);
        debug!("round {} counting down from {from}", state.epoch);

        if from == 0 {
            self.open(state);
        }

        state.epoch
    }

    /// Opens the capture window. Called once per round.
    fn open(&self, state: &mut RoundState) {
        state.phase = RoundPhase::Open;
        state.can_capture = true;
        state.countdown_word = None;
        self.locked.store(false, Ordering::Release);
        debug!("round {} open for capture", state.epoch);
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.state.lock().phase
    }

    /// Returns the epoch of the current countdown timer.
    pub fn epoch(&self) -> RoundEpoch {
        self.state.lock().epoch
    }

    /// Returns the remaining countdown value.
    pub fn countdown(&self) -> u8 {
        self.state.lock().countdown
    }

    /// Returns whether the capture window is open.
    pub fn can_capture(&self) -> bool {
        self.state.lock().can_capture
    }

    /// Returns whether the capture gate is closed.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Returns the word announced for the current countdown value.
    pub fn countdown_word(&self) -> Option<Move> {
        self.state.lock().countdown_word
    }

    /// Returns the last resolved round.
    ///
    /// The last round stays visible through the following countdown until
    /// the next resolution replaces it or [`reset`](Self::reset) clears it.
    pub fn last_round(&self) -> Option<RoundResult> {
        self.state.lock().last
    }

    /// Returns the player's last resolved move.
    pub fn player_move(&self) -> Option<Move> {
        self.last_round().map(|round| round.player)
    }

    /// Returns the computer's last resolved move.
    pub fn computer_move(&self) -> Option<Move> {
        self.last_round().map(|round| round.computer)
    }

    /// Returns the last resolved outcome.
    pub fn result(&self) -> Option<Outcome> {
        self.last_round().map(|round| round.outcome)
    }

    /// Returns the session scores.
    pub fn scores(&self) -> ScoreBoard {
        *self.scores.lock()
    }

    /// Returns a consistent view of the whole controller.
    pub fn snapshot(&self) -> RoundSnapshot {
        let state = self.state.lock();
        let scores = *self.scores.lock();
        RoundSnapshot {
            phase: state.phase,
            epoch: state.epoch,
            countdown: state.countdown,
            can_capture: state.can_capture,
            locked: self.is_locked(),
            countdown_word: state.countdown_word,
            player_move: state.last.map(|round| round.player),
            computer_move: state.last.map(|round| round.computer),
            result: state.last.map(|round| round.outcome),
            scores,
        }
    }
}
