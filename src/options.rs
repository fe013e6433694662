//! Round configuration options.

/// Configuration options for a round controller.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use spsrs::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_countdown_from(5)
///     .with_tick_interval_ms(500)
///     .with_announce_countdown(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Countdown value each round starts from. 0 opens capture immediately.
    pub countdown_from: u8,
    /// Period, in milliseconds, at which drivers should call `tick`.
    pub tick_interval_ms: u32,
    /// Whether countdown words ("STONE", "PAPER", "SCISSORS") are announced.
    pub announce_countdown: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            countdown_from: 3,
            tick_interval_ms: 1000,
            announce_countdown: true,
        }
    }
}

impl RoundOptions {
    /// Sets the countdown start value.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_countdown_from(5);
    /// assert_eq!(options.countdown_from, 5);
    /// ```
    #[must_use]
    pub const fn with_countdown_from(mut self, countdown_from: u8) -> Self {
        self.countdown_from = countdown_from;
        self
    }

    /// Sets the tick period.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_tick_interval_ms(250);
    /// assert_eq!(options.tick_interval_ms, 250);
    /// ```
    #[must_use]
    pub const fn with_tick_interval_ms(mut self, tick_interval_ms: u32) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Sets whether countdown words are announced.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_announce_countdown(false);
    /// assert_eq!(options.announce_countdown, false);
    /// ```
    #[must_use]
    pub const fn with_announce_countdown(mut self, announce: bool) -> Self {
        self.announce_countdown = announce;
        self
    }
}
