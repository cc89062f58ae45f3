//! Pose data types for body-measurement workflows.
//!
//! This crate provides the vocabulary and per-frame data model for consuming
//! pose-detector output:
//!
//! - [`Landmark`] - COCO 17-point anatomical landmark identifiers
//! - [`Keypoint`] - a detected position with optional depth and confidence
//! - [`KeypointSet`] - one pose's keypoints, keyed by landmark
//! - [`PoseFrame`] - a keypoint set with frame id and capture timestamp
//!
//! Pose detection itself is an external collaborator: these types carry its
//! output, they never run inference. Downstream consumers (measurement
//! estimation, fitting sessions) live in separate crates so that this one
//! stays dependency-light.
//!
//! # Example
//!
//! ```
//! use pose_types::{Keypoint, KeypointSet, Landmark};
//!
//! let set: KeypointSet = [
//!     (Landmark::LeftShoulder, Keypoint::new(0.0, 0.0).with_score(0.9)),
//!     (Landmark::RightShoulder, Keypoint::new(100.0, 0.0).with_score(0.8)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let left = set.require(Landmark::LeftShoulder)?;
//! assert!(left.is_visible(0.5));
//! # Ok::<(), pose_types::PoseError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod frame;
mod keypoint;
mod landmark;
mod set;

pub use error::{PoseError, Result};
pub use frame::PoseFrame;
pub use keypoint::Keypoint;
pub use landmark::Landmark;
pub use set::KeypointSet;
