//! Pose-to-measurement estimation.

use pose_types::{KeypointSet, Landmark, PoseError};

use crate::distance::keypoint_distance;
use crate::error::MeasureResult;
use crate::measurements::Measurements;
use crate::scale::PixelScale;

/// Landmarks that must be present for a measurement pass.
pub const REQUIRED_LANDMARKS: [Landmark; 6] = [
    Landmark::LeftShoulder,
    Landmark::RightShoulder,
    Landmark::LeftHip,
    Landmark::RightHip,
    Landmark::Nose,
    Landmark::LeftAnkle,
];

// Heuristic body-proportion factors. These match reference behavior and are
// not tunables: changing one is a semantic change, not a calibration.
const CHEST_FROM_SHOULDERS: f64 = 1.2;
const WAIST_FROM_HIP_SPAN: f64 = 0.9;
const HIPS_FROM_HIP_SPAN: f64 = 1.15;
const HEIGHT_FROM_NOSE_ANKLE: f64 = 1.1;

/// Estimates body measurements from one frame's keypoints, using the
/// assumed pixel scale.
///
/// See [`estimate_with_scale`] for the contract.
///
/// # Errors
///
/// Same as [`estimate_with_scale`].
pub fn estimate(keypoints: &KeypointSet) -> MeasureResult<Measurements> {
    estimate_with_scale(keypoints, PixelScale::assumed())
}

/// Estimates body measurements from one frame's keypoints.
///
/// A pure function: no side effects, no I/O, no caching, no state across
/// calls. Safe to call concurrently. Callers decide how often to invoke it
/// and what to do with failures (skip the frame, reuse a previous result,
/// surface a message).
///
/// The spans are derived from landmark distances scaled by fixed
/// body-proportion factors: chest from the shoulder span, waist and hips
/// from the hip span, height from the nose-to-left-ankle distance.
///
/// # Errors
///
/// - [`PoseError::MissingLandmark`] (wrapped) when any of
///   [`REQUIRED_LANDMARKS`] is absent - no partial result is produced.
/// - [`PoseError::NonFiniteKeypoint`] (wrapped) when a required landmark
///   carries NaN or infinite components.
///
/// # Example
///
/// ```
/// use fit_measure::estimate;
/// use pose_types::{Keypoint, KeypointSet, Landmark};
///
/// let keypoints: KeypointSet = [
///     (Landmark::LeftShoulder, Keypoint::new(0.0, 0.0)),
///     (Landmark::RightShoulder, Keypoint::new(100.0, 0.0)),
///     (Landmark::LeftHip, Keypoint::new(10.0, 200.0)),
///     (Landmark::RightHip, Keypoint::new(90.0, 200.0)),
///     (Landmark::Nose, Keypoint::new(50.0, -50.0)),
///     (Landmark::LeftAnkle, Keypoint::new(50.0, 600.0)),
/// ]
/// .into_iter()
/// .collect();
///
/// let m = estimate(&keypoints)?;
/// assert!((m.shoulders - 26.458).abs() < 1e-3);
/// assert!((m.chest - 31.75).abs() < 1e-3);
/// # Ok::<(), fit_measure::MeasureError>(())
/// ```
pub fn estimate_with_scale(
    keypoints: &KeypointSet,
    scale: PixelScale,
) -> MeasureResult<Measurements> {
    // Validate completeness and finiteness up front so no measurement is
    // computed from a set that would fail partway through.
    for landmark in REQUIRED_LANDMARKS {
        let kp = keypoints.require(landmark)?;
        if !kp.is_finite() {
            return Err(PoseError::non_finite(landmark).into());
        }
    }

    let left_shoulder = keypoints.require(Landmark::LeftShoulder)?;
    let right_shoulder = keypoints.require(Landmark::RightShoulder)?;
    let left_hip = keypoints.require(Landmark::LeftHip)?;
    let right_hip = keypoints.require(Landmark::RightHip)?;
    let nose = keypoints.require(Landmark::Nose)?;
    let left_ankle = keypoints.require(Landmark::LeftAnkle)?;

    let shoulder_span = keypoint_distance(left_shoulder, right_shoulder);
    let hip_span = keypoint_distance(left_hip, right_hip);
    let nose_to_ankle = keypoint_distance(nose, left_ankle);

    Ok(Measurements {
        shoulders: scale.to_cm(shoulder_span),
        chest: scale.to_cm(shoulder_span * CHEST_FROM_SHOULDERS),
        waist: scale.to_cm(hip_span * WAIST_FROM_HIP_SPAN),
        hips: scale.to_cm(hip_span * HIPS_FROM_HIP_SPAN),
        height: scale.to_cm(nose_to_ankle * HEIGHT_FROM_NOSE_ANKLE),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pose_types::Keypoint;

    fn reference_pose() -> KeypointSet {
        [
            (Landmark::LeftShoulder, Keypoint::new(0.0, 0.0)),
            (Landmark::RightShoulder, Keypoint::new(100.0, 0.0)),
            (Landmark::LeftHip, Keypoint::new(10.0, 200.0)),
            (Landmark::RightHip, Keypoint::new(90.0, 200.0)),
            (Landmark::Nose, Keypoint::new(50.0, -50.0)),
            (Landmark::LeftAnkle, Keypoint::new(50.0, 600.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn estimate_reference_pose() {
        let m = estimate(&reference_pose()).unwrap();

        // shoulder span 100 px, hip span 80 px, nose-to-ankle 650 px.
        assert_relative_eq!(m.shoulders, 100.0 * 0.264_583_333_3, epsilon = 1e-9);
        assert_relative_eq!(m.chest, 100.0 * 1.2 * 0.264_583_333_3, epsilon = 1e-9);
        assert_relative_eq!(m.waist, 80.0 * 0.9 * 0.264_583_333_3, epsilon = 1e-9);
        assert_relative_eq!(m.hips, 80.0 * 1.15 * 0.264_583_333_3, epsilon = 1e-9);
        assert_relative_eq!(m.height, 650.0 * 1.1 * 0.264_583_333_3, epsilon = 1e-9);

        assert_relative_eq!(m.chest, 31.75, epsilon = 1e-6);
        assert_relative_eq!(m.waist, 19.05, epsilon = 1e-6);
        assert_relative_eq!(m.hips, 24.341_666_66, epsilon = 1e-6);
        assert!(m.is_physical());
    }

    #[test]
    fn estimate_is_linear_in_coordinates() {
        let base = estimate(&reference_pose()).unwrap();

        let k = 2.5;
        let scaled: KeypointSet = reference_pose()
            .iter()
            .map(|(l, kp)| (l, kp.scaled(k)))
            .collect();
        let m = estimate(&scaled).unwrap();

        assert_relative_eq!(m.shoulders, base.shoulders * k, epsilon = 1e-9);
        assert_relative_eq!(m.chest, base.chest * k, epsilon = 1e-9);
        assert_relative_eq!(m.waist, base.waist * k, epsilon = 1e-9);
        assert_relative_eq!(m.hips, base.hips * k, epsilon = 1e-9);
        assert_relative_eq!(m.height, base.height * k, epsilon = 1e-9);
    }

    #[test]
    fn estimate_is_idempotent() {
        let keypoints = reference_pose();
        let first = estimate(&keypoints).unwrap();
        let second = estimate(&keypoints).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn estimate_fails_on_each_missing_landmark() {
        for missing in REQUIRED_LANDMARKS {
            let partial: KeypointSet = reference_pose()
                .iter()
                .filter(|(l, _)| *l != missing)
                .map(|(l, kp)| (l, *kp))
                .collect();

            let err = estimate(&partial).unwrap_err();
            assert!(
                err.to_string().contains(missing.name()),
                "error for {missing} should name it, got: {err}"
            );
        }
    }

    #[test]
    fn estimate_ignores_unrelated_missing_landmarks() {
        // Only the six required landmarks matter; eyes, ears, wrists and the
        // right ankle may all be absent.
        assert!(estimate(&reference_pose()).is_ok());
    }

    #[test]
    fn estimate_rejects_non_finite_coordinates() {
        let mut keypoints = reference_pose();
        keypoints.insert(Landmark::Nose, Keypoint::new(f64::NAN, -50.0));

        let err = estimate(&keypoints).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
        assert!(err.to_string().contains("nose"));
    }

    #[test]
    fn estimate_uses_depth_when_both_present() {
        let mut keypoints = reference_pose();
        keypoints.insert(Landmark::LeftShoulder, Keypoint::new(0.0, 0.0).with_depth(0.0));
        keypoints.insert(
            Landmark::RightShoulder,
            Keypoint::new(60.0, 0.0).with_depth(80.0),
        );

        let m = estimate(&keypoints).unwrap();
        // sqrt(60^2 + 80^2) = 100 px shoulder span.
        assert_relative_eq!(m.shoulders, 100.0 * 0.264_583_333_3, epsilon = 1e-9);
    }

    #[test]
    fn estimate_with_calibrated_scale() {
        let scale = PixelScale::from_reference(100.0, 50.0).unwrap();
        let m = estimate_with_scale(&reference_pose(), scale).unwrap();
        // 0.5 cm/px: the 100 px shoulder span becomes 50 cm.
        assert_relative_eq!(m.shoulders, 50.0, epsilon = 1e-9);
    }
}
