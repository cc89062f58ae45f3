//! Per-frame pose detection output.

use serde::{Deserialize, Serialize};

use crate::set::KeypointSet;

/// One frame's pose detection result.
///
/// The unit a pose source yields: an identifier, a capture timestamp in
/// seconds, and the detected keypoints. The detector itself is an external
/// collaborator; this type only carries its output.
///
/// # Example
///
/// ```
/// use pose_types::{Keypoint, KeypointSet, Landmark, PoseFrame};
///
/// let keypoints: KeypointSet = [(Landmark::Nose, Keypoint::new(0.5, 0.3))]
///     .into_iter()
///     .collect();
/// let frame = PoseFrame::new(42, 1.4, keypoints);
///
/// assert_eq!(frame.id, 42);
/// assert_eq!(frame.keypoints.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Unique frame identifier.
    pub id: u64,

    /// Capture timestamp in seconds.
    pub timestamp: f64,

    /// Keypoints of the detected pose.
    pub keypoints: KeypointSet,
}

impl PoseFrame {
    /// Creates a new frame.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(id: u64, timestamp: f64, keypoints: KeypointSet) -> Self {
        Self {
            id,
            timestamp,
            keypoints,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::keypoint::Keypoint;
    use crate::landmark::Landmark;

    #[test]
    fn frame_new() {
        let keypoints: KeypointSet = [(Landmark::Nose, Keypoint::new(1.0, 2.0))]
            .into_iter()
            .collect();
        let frame = PoseFrame::new(7, 0.25, keypoints);

        assert_eq!(frame.id, 7);
        assert!((frame.timestamp - 0.25).abs() < 1e-12);
        assert!(frame.keypoints.contains(Landmark::Nose));
    }

    #[test]
    fn frame_serialization_roundtrip() {
        let keypoints: KeypointSet = [(
            Landmark::LeftShoulder,
            Keypoint::new(0.1, 0.2).with_score(0.9),
        )]
        .into_iter()
        .collect();
        let frame = PoseFrame::new(1, 0.5, keypoints);

        let json = serde_json::to_string(&frame).unwrap();
        let parsed: PoseFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }
}
