//! Per-frame keypoint collections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};
use crate::keypoint::Keypoint;
use crate::landmark::Landmark;

/// The keypoints of one detected pose, keyed by landmark.
///
/// Valid for the lifetime of a single frame's processing. A detector may
/// supply any subset of the topology; consumers that need specific
/// landmarks use [`require`](Self::require) to fail explicitly instead of
/// reading a garbage value.
///
/// Serializes transparently as a JSON object keyed by wire name, matching
/// the detector output format.
///
/// # Example
///
/// ```
/// use pose_types::{Keypoint, KeypointSet, Landmark};
///
/// let mut set = KeypointSet::new();
/// set.insert(Landmark::Nose, Keypoint::new(50.0, -50.0));
///
/// assert!(set.contains(Landmark::Nose));
/// assert!(set.require(Landmark::LeftAnkle).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeypointSet {
    keypoints: HashMap<Landmark, Keypoint>,
}

impl KeypointSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keypoints: HashMap::new(),
        }
    }

    /// Inserts a keypoint, replacing any previous one for the landmark.
    pub fn insert(&mut self, landmark: Landmark, keypoint: Keypoint) {
        self.keypoints.insert(landmark, keypoint);
    }

    /// Gets a keypoint by landmark.
    #[must_use]
    pub fn get(&self, landmark: Landmark) -> Option<&Keypoint> {
        self.keypoints.get(&landmark)
    }

    /// Gets a keypoint by landmark, failing explicitly when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::MissingLandmark`] naming the absent landmark.
    pub fn require(&self, landmark: Landmark) -> Result<&Keypoint> {
        self.keypoints
            .get(&landmark)
            .ok_or(PoseError::MissingLandmark { landmark })
    }

    /// Returns `true` if the landmark is present.
    #[must_use]
    pub fn contains(&self, landmark: Landmark) -> bool {
        self.keypoints.contains_key(&landmark)
    }

    /// Returns the number of keypoints in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Returns `true` if the set holds no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Returns the number of keypoints passing a confidence threshold.
    #[must_use]
    pub fn visible_count(&self, threshold: f64) -> usize {
        self.keypoints
            .values()
            .filter(|kp| kp.is_visible(threshold))
            .count()
    }

    /// Returns the mean confidence over keypoints that carry a score.
    ///
    /// Returns `None` when no keypoint has a score.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self.keypoints.values().filter_map(|kp| kp.score).collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    /// Iterates over `(landmark, keypoint)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, &Keypoint)> {
        self.keypoints.iter().map(|(l, kp)| (*l, kp))
    }
}

impl FromIterator<(Landmark, Keypoint)> for KeypointSet {
    fn from_iter<I: IntoIterator<Item = (Landmark, Keypoint)>>(iter: I) -> Self {
        Self {
            keypoints: iter.into_iter().collect(),
        }
    }
}
