//! Error types for pose data handling.

use thiserror::Error;

use crate::landmark::Landmark;

/// Result type alias for pose operations.
pub type Result<T> = std::result::Result<T, PoseError>;

/// Errors that can occur when consuming pose data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoseError {
    /// A required landmark is absent from the keypoint set.
    #[error("missing required landmark: {landmark}")]
    MissingLandmark {
        /// The absent landmark.
        landmark: Landmark,
    },

    /// A present landmark has NaN or infinite components.
    #[error("non-finite keypoint for landmark: {landmark}")]
    NonFiniteKeypoint {
        /// The offending landmark.
        landmark: Landmark,
    },
}

impl PoseError {
    /// Creates a missing landmark error.
    #[must_use]
    pub const fn missing(landmark: Landmark) -> Self {
        Self::MissingLandmark { landmark }
    }

    /// Creates a non-finite keypoint error.
    #[must_use]
    pub const fn non_finite(landmark: Landmark) -> Self {
        Self::NonFiniteKeypoint { landmark }
    }
}
