//! Error types for building hand landmarks from raw adapter buffers.

use thiserror::Error;

/// Errors that can occur while building [`HandLandmarks`](crate::HandLandmarks).
///
/// The round controller never returns these. They only surface at the
/// adapter boundary, where raw coordinate buffers are turned into hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LandmarkError {
    /// The buffer does not hold the expected number of values.
    #[error("expected {expected} values, found {found}")]
    WrongLength {
        /// Number of values required.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// A coordinate is NaN or infinite.
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite {
        /// Index of the offending landmark.
        index: usize,
    },
}
