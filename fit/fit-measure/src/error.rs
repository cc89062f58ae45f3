//! Error types for measurement estimation.

use pose_types::PoseError;
use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// The input keypoint set cannot support a measurement pass.
    #[error(transparent)]
    Pose(#[from] PoseError),

    /// A calibration reference was unusable.
    #[error("invalid scale: {0}")]
    InvalidScale(String),
}

impl MeasureError {
    /// Creates an invalid scale error.
    #[must_use]
    pub fn invalid_scale(details: impl Into<String>) -> Self {
        Self::InvalidScale(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_types::Landmark;

    #[test]
    fn pose_errors_pass_through_unchanged() {
        let err: MeasureError = PoseError::missing(Landmark::RightHip).into();
        assert_eq!(err.to_string(), "missing required landmark: rightHip");
    }

    #[test]
    fn invalid_scale_message() {
        let err = MeasureError::invalid_scale("reference was zero");
        assert!(err.to_string().contains("reference was zero"));
    }
}
