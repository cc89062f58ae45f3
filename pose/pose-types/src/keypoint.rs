//! A single detected keypoint.

use serde::{Deserialize, Serialize};

/// A detected landmark position for one frame.
///
/// Coordinates are pixel or normalized image coordinates, whichever the
/// upstream detector produces. Depth and confidence are optional: 2D-only
/// detectors omit `z`, and some detectors omit per-landmark scores.
/// Keypoints are ephemeral — produced fresh each frame and never mutated.
///
/// # Example
///
/// ```
/// use pose_types::Keypoint;
///
/// let kp = Keypoint::new(120.0, 80.0).with_score(0.92);
/// assert!(kp.is_visible(0.5));
/// assert!(kp.z.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// X coordinate.
    pub x: f64,

    /// Y coordinate.
    pub y: f64,

    /// Optional depth component.
    ///
    /// `Some(0.0)` is a real depth at the camera plane, not an absent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,

    /// Optional detection confidence in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Keypoint {
    /// Creates a 2D keypoint with no depth and no score.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            score: None,
        }
    }

    /// Attaches a depth component.
    #[must_use]
    pub const fn with_depth(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Attaches a confidence score.
    #[must_use]
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Returns `true` if every present component is finite.
    ///
    /// NaN or infinite coordinates must be rejected before measurement,
    /// never propagated into output values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_none_or(f64::is_finite)
            && self.score.is_none_or(f64::is_finite)
    }

    /// Returns `true` if the keypoint passes a confidence threshold.
    ///
    /// A keypoint without a score counts as visible — confidence is
    /// interpreted by callers, and an absent score never blocks one.
    #[must_use]
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.score.is_none_or(|s| s >= threshold)
    }

    /// Returns the keypoint with all spatial components scaled by `k`.
    ///
    /// Used to convert between coordinate spaces (e.g. normalized to
    /// pixel). Confidence is unchanged.
    #[must_use]
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
            z: self.z.map(|z| z * k),
            score: self.score,
        }
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
