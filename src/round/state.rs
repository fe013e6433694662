//! Round state types.

use core::fmt;

use crate::gesture::Move;
use crate::result::{Outcome, RoundResult, ScoreBoard};

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Counting down; frames are discarded.
    #[default]
    Countdown,
    /// Capture window; the first recognized gesture resolves the round.
    Open,
    /// A move was captured and scored. The controller leaves this phase
    /// immediately for the next countdown.
    Resolved,
}

/// Identifies one round's countdown timer.
///
/// Every round start produces a new epoch. Ticks carrying an older epoch
/// belong to a cancelled timer and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoundEpoch(u32);

impl RoundEpoch {
    /// Returns the raw epoch counter.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<u32> for RoundEpoch {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<RoundEpoch> for u32 {
    fn from(epoch: RoundEpoch) -> Self {
        epoch.0
    }
}

impl fmt::Display for RoundEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to a previous round's timer; nothing changed.
    Stale,
    /// The countdown moved down by one.
    Counting {
        /// Countdown value after this tick.
        remaining: u8,
        /// Word to announce for the new value, if announcements are on.
        word: Option<Move>,
    },
    /// The countdown reached zero and capture opened.
    Opened,
    /// Capture is already open; nothing changed.
    Idle,
}

impl TickOutcome {
    /// Returns whether the driver should stop ticking this epoch.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Counting { .. })
    }
}

/// Result of delivering one frame to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The capture gate was closed; the frame was discarded.
    Locked,
    /// The frame held no hand.
    NoHand,
    /// A hand was seen but its gesture was not recognized.
    Unrecognized,
    /// The frame resolved the round and the next countdown started.
    Resolved {
        /// The resolved round.
        result: RoundResult,
        /// Epoch of the countdown that just started.
        next: RoundEpoch,
    },
}

/// Mutable state of the current round.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RoundState {
    pub phase: RoundPhase,
    pub epoch: RoundEpoch,
    pub countdown: u8,
    pub can_capture: bool,
    pub countdown_word: Option<Move>,
    pub last: Option<RoundResult>,
}

/// Read-only view of the controller for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current phase.
    pub phase: RoundPhase,
    /// Epoch of the current countdown timer.
    pub epoch: RoundEpoch,
    /// Remaining countdown value.
    pub countdown: u8,
    /// Whether the capture window is open.
    pub can_capture: bool,
    /// Whether the capture gate is closed.
    pub locked: bool,
    /// Word announced for the current countdown value.
    pub countdown_word: Option<Move>,
    /// The player's last resolved move.
    pub player_move: Option<Move>,
    /// The computer's last resolved move.
    pub computer_move: Option<Move>,
    /// The last resolved outcome.
    pub result: Option<Outcome>,
    /// Session scores.
    pub scores: ScoreBoard,
}
