//! Move and gesture types.

use core::fmt;

/// A move that can be played in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Closed fist.
    Stone,
    /// Open hand.
    Paper,
    /// Index and middle finger extended.
    Scissors,
}

impl Move {
    /// All playable moves, in countdown announcement order.
    pub const ALL: [Self; 3] = [Self::Stone, Self::Paper, Self::Scissors];

    /// Returns whether this move defeats `other`.
    ///
    /// Stone beats scissors, scissors beats paper, paper beats stone.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::Move;
    ///
    /// assert!(Move::Stone.beats(Move::Scissors));
    /// assert!(!Move::Stone.beats(Move::Paper));
    /// assert!(!Move::Stone.beats(Move::Stone));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Stone, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Stone)
        )
    }

    /// Returns the upper-case name used for display and announcements.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stone => "STONE",
            Self::Paper => "PAPER",
            Self::Scissors => "SCISSORS",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// No fingers extended.
    Stone,
    /// Four fingers extended.
    Paper,
    /// Exactly two fingers extended.
    Scissors,
    /// No hand, a malformed hand, or an ambiguous finger count.
    Unknown,
}

impl Gesture {
    /// Converts the gesture into a playable move.
    ///
    /// Returns `None` for [`Gesture::Unknown`].
    #[must_use]
    pub const fn as_move(self) -> Option<Move> {
        match self {
            Self::Stone => Some(Move::Stone),
            Self::Paper => Some(Move::Paper),
            Self::Scissors => Some(Move::Scissors),
            Self::Unknown => None,
        }
    }
}

impl From<Move> for Gesture {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Stone => Self::Stone,
            Move::Paper => Self::Paper,
            Move::Scissors => Self::Scissors,
        }
    }
}
