//! Body-measurement estimation from pose keypoints.
//!
//! This crate converts one frame's pose keypoints into linear body
//! measurements in centimeters:
//!
//! - [`keypoint_distance`] - Euclidean distance with conditional depth
//! - [`estimate`] / [`estimate_with_scale`] - the measurement pass
//! - [`Measurements`] - shoulders, chest, waist, hips, height
//! - [`PixelScale`] - assumed or reference-calibrated pixel→cm conversion
//!
//! The estimator is a pure, synchronous, re-entrant function with no state
//! across frames. Per-frame polling, confidence thresholding, and history
//! belong to callers (see the `fit-session` crate).
//!
//! # Accuracy
//!
//! The default [`PIXEL_TO_CM_RATIO`] and the body-proportion factors are
//! heuristic approximations, not calibrated physical measurements; results
//! are estimates for visual try-on, not tailoring. The factors match
//! reference behavior exactly and are not exposed for tuning.
//!
//! # Example
//!
//! ```
//! use fit_measure::estimate;
//! use pose_types::{Keypoint, KeypointSet, Landmark};
//!
//! let keypoints: KeypointSet = [
//!     (Landmark::LeftShoulder, Keypoint::new(0.0, 0.0)),
//!     (Landmark::RightShoulder, Keypoint::new(100.0, 0.0)),
//!     (Landmark::LeftHip, Keypoint::new(10.0, 200.0)),
//!     (Landmark::RightHip, Keypoint::new(90.0, 200.0)),
//!     (Landmark::Nose, Keypoint::new(50.0, -50.0)),
//!     (Landmark::LeftAnkle, Keypoint::new(50.0, 600.0)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let m = estimate(&keypoints)?;
//! assert!(m.is_physical());
//! # Ok::<(), fit_measure::MeasureError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod distance;
mod error;
mod estimator;
mod measurements;
mod scale;

pub use distance::keypoint_distance;
pub use error::{MeasureError, MeasureResult};
pub use estimator::{estimate, estimate_with_scale, REQUIRED_LANDMARKS};
pub use measurements::Measurements;
pub use scale::{PixelScale, PIXEL_TO_CM_RATIO};

// Re-export the input types for convenience.
pub use pose_types::{Keypoint, KeypointSet, Landmark};
