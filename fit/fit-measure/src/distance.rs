//! Keypoint distance calculation.

use nalgebra::Vector3;
use pose_types::Keypoint;

/// Euclidean distance between two keypoints.
///
/// Depth contributes only when both keypoints carry a depth component;
/// otherwise the calculation degrades to the 2D distance in the image
/// plane. Mixing a keypoint with depth and one without is a defined
/// partial-2D fallback, not an error. A depth of exactly `0.0` is a real
/// depth and participates in the 3D form.
///
/// # Example
///
/// ```
/// use fit_measure::keypoint_distance;
/// use pose_types::Keypoint;
///
/// let a = Keypoint::new(0.0, 0.0);
/// let b = Keypoint::new(3.0, 4.0);
/// assert!((keypoint_distance(&a, &b) - 5.0).abs() < 1e-12); // 3-4-5 triangle
///
/// // Both depths present: full 3D distance.
/// let a = a.with_depth(0.0);
/// let b = b.with_depth(12.0);
/// assert!((keypoint_distance(&a, &b) - 13.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn keypoint_distance(a: &Keypoint, b: &Keypoint) -> f64 {
    let dz = match (a.z, b.z) {
        (Some(az), Some(bz)) => bz - az,
        _ => 0.0,
    };
    Vector3::new(b.x - a.x, b.y - a.y, dz).norm()
}
