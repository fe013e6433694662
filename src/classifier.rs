//! Gesture classification from hand keypoints.

use crate::gesture::Gesture;
use crate::landmark::{
    INDEX_PIP, INDEX_TIP, Keypoint, LANDMARK_COUNT, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP,
    RING_PIP, RING_TIP,
};

/// `(tip, base)` landmark pairs for the four non-thumb fingers.
///
/// The thumb folds sideways rather than downward, so it is left out.
pub const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Counts extended non-thumb fingers.
///
/// A finger is extended when its tip sits higher on screen than its middle
/// joint, i.e. the tip's `y` is smaller.
///
/// Returns `None` if fewer than 21 keypoints are supplied or a finger
/// keypoint is non-finite.
#[must_use]
pub fn extended_fingers(keypoints: &[Keypoint]) -> Option<u8> {
    if keypoints.len() < LANDMARK_COUNT {
        return None;
    }

    let mut extended = 0;
    for (tip, base) in FINGERS {
        let (tip, base) = (keypoints[tip], keypoints[base]);
        if !tip.is_finite() || !base.is_finite() {
            return None;
        }
        if tip.y < base.y {
            extended += 1;
        }
    }

    Some(extended)
}

/// Classifies a hand into a gesture.
///
/// | extended fingers | gesture    |
/// |------------------|------------|
/// | 0                | `Stone`    |
/// | 2                | `Scissors` |
/// | 4                | `Paper`    |
/// | 1 or 3           | `Unknown`  |
///
/// An empty or malformed keypoint set is `Unknown` as well; frames without a
/// hand are routine.
///
/// # Example
///
/// ```
/// use spsrs::{Gesture, classify};
///
/// assert_eq!(classify(&[]), Gesture::Unknown);
/// ```
#[must_use]
pub fn classify(keypoints: &[Keypoint]) -> Gesture {
    match extended_fingers(keypoints) {
        Some(0) => Gesture::Stone,
        Some(2) => Gesture::Scissors,
        Some(4..) => Gesture::Paper,
        _ => Gesture::Unknown,
    }
}
