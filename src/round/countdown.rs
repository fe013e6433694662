use log::trace;

use crate::gesture::Move;
use crate::opponent::Opponent;

use super::{RoundController, RoundEpoch, RoundPhase, TickOutcome};

impl<O: Opponent> RoundController<O> {
    /// Returns the word announced while the countdown shows `value`.
    ///
    /// Words follow stone, paper, scissors from the first value down and
    /// wrap around for countdowns longer than three.
    pub(super) const fn countdown_word_for(&self, value: u8) -> Option<Move> {
        if !self.options.announce_countdown || value == 0 {
            return None;
        }

        let step = self.options.countdown_from.saturating_sub(value) as usize;
        Some(Move::ALL[step % Move::ALL.len()])
    }

    /// Advances the countdown by one tick.
    ///
    /// `epoch` must be the epoch the calling timer was armed for. Ticks from
    /// an earlier round are ignored, as are ticks after the capture window
    /// has opened, so a timer that keeps firing cannot re-arm anything.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::{RoundController, RoundOptions, TickOutcome};
    ///
    /// let controller = RoundController::new(RoundOptions::default(), 7);
    /// let epoch = controller.epoch();
    ///
    /// assert!(matches!(controller.tick(epoch), TickOutcome::Counting { remaining: 2, .. }));
    /// assert!(matches!(controller.tick(epoch), TickOutcome::Counting { remaining: 1, .. }));
    /// assert_eq!(controller.tick(epoch), TickOutcome::Opened);
    /// assert_eq!(controller.tick(epoch), TickOutcome::Idle);
    /// assert!(!controller.is_locked());
    /// ```
    pub fn tick(&self, epoch: RoundEpoch) -> TickOutcome {
        let mut state = self.state.lock();

        if state.epoch != epoch {
            trace!("stale tick for round {epoch}, current is {}", state.epoch);
            return TickOutcome::Stale;
        }

        if state.phase != RoundPhase::Countdown {
            return TickOutcome::Idle;
        }

        state.countdown = state.countdown.saturating_sub(1);
        if state.countdown == 0 {
            self.open(&mut state);
            return TickOutcome::Opened;
        }

        state.countdown_word = self.countdown_word_for(state.countdown);
        TickOutcome::Counting {
            remaining: state.countdown,
            word: state.countdown_word,
        }
    }
}
