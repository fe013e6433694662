//! Hand keypoints as delivered by the landmark detector.
//!
//! The detector reports 21 keypoints per hand in a fixed order (wrist, then
//! four joints per digit from thumb to pinky). Coordinates are normalized to
//! the video frame, with `y` growing downward.

use crate::error::LandmarkError;

/// Number of keypoints in one detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// Number of `f32` values one hand occupies in a flat `x, y` buffer.
pub const HAND_STRIDE: usize = LANDMARK_COUNT * 2;

/// Wrist.
pub const WRIST: usize = 0;
/// Thumb carpometacarpal joint.
pub const THUMB_CMC: usize = 1;
/// Thumb metacarpophalangeal joint.
pub const THUMB_MCP: usize = 2;
/// Thumb interphalangeal joint.
pub const THUMB_IP: usize = 3;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index finger knuckle.
pub const INDEX_MCP: usize = 5;
/// Index finger middle joint.
pub const INDEX_PIP: usize = 6;
/// Index finger top joint.
pub const INDEX_DIP: usize = 7;
/// Index finger tip.
pub const INDEX_TIP: usize = 8;
/// Middle finger knuckle.
pub const MIDDLE_MCP: usize = 9;
/// Middle finger middle joint.
pub const MIDDLE_PIP: usize = 10;
/// Middle finger top joint.
pub const MIDDLE_DIP: usize = 11;
/// Middle finger tip.
pub const MIDDLE_TIP: usize = 12;
/// Ring finger knuckle.
pub const RING_MCP: usize = 13;
/// Ring finger middle joint.
pub const RING_PIP: usize = 14;
/// Ring finger top joint.
pub const RING_DIP: usize = 15;
/// Ring finger tip.
pub const RING_TIP: usize = 16;
/// Pinky knuckle.
pub const PINKY_MCP: usize = 17;
/// Pinky middle joint.
pub const PINKY_PIP: usize = 18;
/// Pinky top joint.
pub const PINKY_DIP: usize = 19;
/// Pinky tip.
pub const PINKY_TIP: usize = 20;

/// A normalized 2D keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keypoint {
    /// Horizontal position, 0.0 at the left edge.
    pub x: f32,
    /// Vertical position, 0.0 at the top edge.
    pub y: f32,
}

impl Keypoint {
    /// Creates a new keypoint.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns whether both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The 21 keypoints of one detected hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Keypoint; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Builds a hand from exactly 21 keypoints.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::WrongLength`] if `points` does not hold
    /// exactly [`LANDMARK_COUNT`] keypoints, or [`LandmarkError::NonFinite`]
    /// if any coordinate is NaN or infinite.
    pub fn from_points(points: &[Keypoint]) -> Result<Self, LandmarkError> {
        let points: [Keypoint; LANDMARK_COUNT] =
            points.try_into().map_err(|_| LandmarkError::WrongLength {
                expected: LANDMARK_COUNT,
                found: points.len(),
            })?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }

        Ok(Self { points })
    }

    /// Builds a hand from a flat `x0, y0, x1, y1, ...` buffer of 42 values.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::WrongLength`] if `values` does not hold
    /// exactly [`HAND_STRIDE`] values, or [`LandmarkError::NonFinite`] if any
    /// coordinate is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use spsrs::{HandLandmarks, LandmarkError};
    ///
    /// let hand = HandLandmarks::from_flat(&[0.5; 42]).unwrap();
    /// assert_eq!(hand.points().len(), 21);
    ///
    /// let err = HandLandmarks::from_flat(&[0.5; 10]).unwrap_err();
    /// assert_eq!(err, LandmarkError::WrongLength { expected: 42, found: 10 });
    /// ```
    pub fn from_flat(values: &[f32]) -> Result<Self, LandmarkError> {
        if values.len() != HAND_STRIDE {
            return Err(LandmarkError::WrongLength {
                expected: HAND_STRIDE,
                found: values.len(),
            });
        }

        let mut points = [Keypoint::default(); LANDMARK_COUNT];
        for (index, (point, pair)) in points.iter_mut().zip(values.chunks_exact(2)).enumerate() {
            *point = Keypoint::new(pair[0], pair[1]);
            if !point.is_finite() {
                return Err(LandmarkError::NonFinite { index });
            }
        }

        Ok(Self { points })
    }

    /// Reads the first hand from a buffer holding zero or more hands.
    ///
    /// An empty buffer means the detector found no hand and yields
    /// `Ok(None)`. Hands after the first are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::WrongLength`] if the buffer length is not a
    /// multiple of [`HAND_STRIDE`], or [`LandmarkError::NonFinite`] if the
    /// first hand holds a non-finite coordinate.
    pub fn first_from_flat(values: &[f32]) -> Result<Option<Self>, LandmarkError> {
        if values.is_empty() {
            return Ok(None);
        }

        if values.len() % HAND_STRIDE != 0 {
            return Err(LandmarkError::WrongLength {
                expected: values.len().next_multiple_of(HAND_STRIDE),
                found: values.len(),
            });
        }

        Self::from_flat(&values[..HAND_STRIDE]).map(Some)
    }

    /// Returns the keypoints in detector order.
    #[must_use]
    pub const fn points(&self) -> &[Keypoint] {
        &self.points
    }

    /// Returns the keypoint at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Keypoint> {
        self.points.get(index).copied()
    }
}

impl AsRef<[Keypoint]> for HandLandmarks {
    fn as_ref(&self) -> &[Keypoint] {
        &self.points
    }
}
