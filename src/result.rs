//! Round outcome and score types.

use core::fmt;

use crate::gesture::Move;

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player's move beats the computer's.
    Win,
    /// Computer's move beats the player's.
    Lose,
    /// Both moves are the same.
    Draw,
}

impl Outcome {
    /// Decides the outcome of `player` against `computer`.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::{Move, Outcome};
    ///
    /// assert_eq!(Outcome::decide(Move::Paper, Move::Stone), Outcome::Win);
    /// assert_eq!(Outcome::decide(Move::Paper, Move::Scissors), Outcome::Lose);
    /// assert_eq!(Outcome::decide(Move::Paper, Move::Paper), Outcome::Draw);
    /// ```
    #[must_use]
    pub const fn decide(player: Move, computer: Move) -> Self {
        if player.beats(computer) {
            Self::Win
        } else if computer.beats(player) {
            Self::Lose
        } else {
            Self::Draw
        }
    }

    /// Returns the upper-case name used for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The move read from the player's hand.
    pub player: Move,
    /// The move drawn for the computer.
    pub computer: Move,
    /// The outcome for the player.
    pub outcome: Outcome,
}

/// Session scores.
///
/// Scores only grow during play; [`RoundController::reset`](crate::RoundController::reset)
/// is the only way back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the computer.
    pub computer: u32,
}

impl ScoreBoard {
    /// Credits the winner of a round. Draws change nothing.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player = self.player.saturating_add(1),
            Outcome::Lose => self.computer = self.computer.saturating_add(1),
            Outcome::Draw => {}
        }
    }

    /// Returns the number of decided (non-draw) rounds.
    #[must_use]
    pub const fn decided(&self) -> u32 {
        self.player.saturating_add(self.computer)
    }
}
