//! Per-frame fitting-session orchestration.
//!
//! This crate drives the loop the measurement core deliberately stays out
//! of: pull a pose per frame, threshold confidence, estimate, record.
//!
//! - [`PoseSource`] - pull-based frame supplier (the detector adapter seam)
//! - [`ReplaySource`] - deterministic source over recorded frames
//! - [`FittingSession`] - threshold, measure, and record per frame
//! - [`MeasurementLog`] - bounded append-only history with JSON persistence
//!
//! Per-frame failures are skip-and-count, never fatal: a missing landmark
//! or a low-confidence pose drops that frame and the loop moves on. Skips
//! are logged through `tracing` at debug level (warn for non-finite
//! input, which usually indicates a detector bug rather than occlusion).
//!
//! # Example
//!
//! ```
//! use fit_session::{FittingSession, ReplaySource, SessionConfig};
//! use pose_types::{Keypoint, KeypointSet, Landmark, PoseFrame};
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
//! let mut source = ReplaySource::new(vec![PoseFrame::new(0, 0.0, keypoints)]);
//! let mut session = FittingSession::new(SessionConfig::default());
//!
//! session.run(&mut source)?;
//! assert!(session.latest().is_some());
//! # Ok::<(), fit_session::SessionError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod history;
mod session;
mod source;

pub use error::{Result, SessionError};
pub use history::{MeasurementLog, MeasurementRecord};
pub use session::{FittingSession, SessionConfig, SessionStats};
pub use source::{PoseSource, ReplaySource};
