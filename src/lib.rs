//! A hand-gesture stone/paper/scissors engine with optional `no_std` support.
//!
//! The crate provides a [`RoundController`] type that manages the round
//! lifecycle: a per-round countdown, a single-shot capture gate, move
//! resolution against a computer opponent, and score accumulation.
//! Hand keypoints come from an external landmark detector and are turned
//! into moves by [`classify`].
//!
//! # Example
//!
//! ```
//! use spsrs::{FrameOutcome, Keypoint, RoundController, RoundOptions, TickOutcome};
//!
//! let controller = RoundController::new(RoundOptions::default(), 42);
//!
//! // A page timer would drive this once per `tick_interval_ms`.
//! let epoch = controller.epoch();
//! while controller.tick(epoch) != TickOutcome::Opened {}
//!
//! // A closed fist: every fingertip below its middle joint.
//! let mut fist = [Keypoint::new(0.5, 0.5); 21];
//! for (tip, _) in spsrs::FINGERS {
//!     fist[tip].y = 0.8;
//! }
//!
//! match controller.submit_frame(&fist) {
//!     FrameOutcome::Resolved { result, .. } => {
//!         println!("{} vs {}: {}", result.player, result.computer, result.outcome);
//!     }
//!     other => unreachable!("open round should resolve, got {other:?}"),
//! }
//! assert!(controller.scores().decided() <= 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "spin")))]
compile_error!(
    "`std` is disabled but `spin` feature is not enabled. Enable `spin` or keep `std` enabled."
);

pub mod classifier;
pub mod error;
pub mod gesture;
pub mod landmark;
pub mod opponent;
pub mod options;
pub mod result;
pub mod round;
mod sync;

// Re-export main types
pub use classifier::{FINGERS, classify, extended_fingers};
pub use error::LandmarkError;
pub use gesture::{Gesture, Move};
pub use landmark::{HAND_STRIDE, HandLandmarks, Keypoint, LANDMARK_COUNT};
pub use opponent::{Opponent, SeededOpponent};
pub use options::RoundOptions;
pub use result::{Outcome, RoundResult, ScoreBoard};
pub use round::{FrameOutcome, RoundController, RoundEpoch, RoundPhase, RoundSnapshot, TickOutcome};
