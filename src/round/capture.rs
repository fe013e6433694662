use core::sync::atomic::{AtomicBool, Ordering};

use log::{info, trace};

use crate::classifier::classify;
use crate::gesture::Move;
use crate::landmark::{HandLandmarks, Keypoint};
use crate::opponent::Opponent;
use crate::result::{Outcome, RoundResult};

use super::{FrameOutcome, RoundController, RoundPhase, RoundState};

impl<O: Opponent> RoundController<O> {
    /// Delivers one captured frame.
    ///
    /// `keypoints` is the detected hand, or an empty slice when the frame
    /// holds none. While the capture gate is closed the frame is discarded.
    /// Otherwise the first frame with a recognized gesture closes the gate,
    /// resolves the round against the opponent, and starts the next
    /// countdown.
    ///
    /// No input is an error: missing, malformed or ambiguous hands leave the
    /// controller untouched.
    pub fn submit_frame(&self, keypoints: &[Keypoint]) -> FrameOutcome {
        if self.locked.load(Ordering::Acquire) {
            trace!("frame discarded, capture gate closed");
            return FrameOutcome::Locked;
        }

        if keypoints.is_empty() {
            return FrameOutcome::NoHand;
        }

        let Some(player) = classify(keypoints).as_move() else {
            return FrameOutcome::Unrecognized;
        };

        let mut state = self.state.lock();
        if self
            .locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            trace!("frame discarded, round already captured");
            return FrameOutcome::Locked;
        }

        // Reopens the gate if the opponent unwinds, leaving the round open.
        let reopen = ReopenGate(&self.locked);
        let computer = self.opponent.lock().pick();
        core::mem::forget(reopen);

        let result = self.resolve(&mut state, player, computer);
        let next = self.enter_countdown(&mut state);
        drop(state);

        FrameOutcome::Resolved { result, next }
    }

    /// Delivers one captured frame holding at most one hand.
    pub fn submit_hand(&self, hand: Option<&HandLandmarks>) -> FrameOutcome {
        hand.map_or_else(
            || self.submit_frame(&[]),
            |hand| self.submit_frame(hand.points()),
        )
    }

    /// Scores `player` against `computer` and records the round.
    ///
    /// The capture gate must already be closed.
    fn resolve(&self, state: &mut RoundState, player: Move, computer: Move) -> RoundResult {
        let outcome = Outcome::decide(player, computer);
        self.scores.lock().record(outcome);

        let result = RoundResult {
            player,
            computer,
            outcome,
        };
        state.phase = RoundPhase::Resolved;
        state.last = Some(result);

        info!(
            "round {} resolved: {player} vs {computer}, {outcome}",
            state.epoch
        );

        result
    }
}

/// Opens the capture gate when dropped.
struct ReopenGate<'a>(&'a AtomicBool);

impl Drop for ReopenGate<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
