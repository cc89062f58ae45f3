//! Pixel-to-centimeter scale model.

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// Assumed conversion ratio from pixels to centimeters.
///
/// One pixel ≈ 1/96 inch ≈ 0.2646 cm. This is a fixed assumption, not a
/// calibrated value: the true ratio depends on camera distance and focal
/// length. Use [`PixelScale::from_reference`] to calibrate against a known
/// in-frame distance when accuracy matters.
pub const PIXEL_TO_CM_RATIO: f64 = 0.264_583_333_3;

/// Conversion from image-space distances to centimeters.
///
/// The default is the assumed [`PIXEL_TO_CM_RATIO`]; a calibrated scale can
/// be derived from a reference distance that is known in both pixels and
/// centimeters. Calibration is always opt-in, so uncalibrated results match
/// reference behavior exactly.
///
/// # Example
///
/// ```
/// use fit_measure::PixelScale;
///
/// let assumed = PixelScale::assumed();
/// assert!((assumed.to_cm(100.0) - 26.458).abs() < 1e-3);
///
/// // A 30 cm ruler spanning 240 px in frame.
/// let calibrated = PixelScale::from_reference(240.0, 30.0)?;
/// assert!((calibrated.to_cm(240.0) - 30.0).abs() < 1e-12);
/// # Ok::<(), fit_measure::MeasureError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScale {
    cm_per_pixel: f64,
}

impl PixelScale {
    /// Creates the assumed, uncalibrated scale.
    #[must_use]
    pub const fn assumed() -> Self {
        Self {
            cm_per_pixel: PIXEL_TO_CM_RATIO,
        }
    }

    /// Derives a calibrated scale from a known reference distance.
    ///
    /// # Arguments
    ///
    /// * `reference_px` - The reference distance as measured in the image
    /// * `reference_cm` - The same distance in centimeters
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidScale`] when either value is
    /// non-finite or not strictly positive.
    pub fn from_reference(reference_px: f64, reference_cm: f64) -> MeasureResult<Self> {
        if !reference_px.is_finite() || reference_px <= 0.0 {
            return Err(MeasureError::invalid_scale(format!(
                "reference pixel distance must be positive and finite, got {reference_px}"
            )));
        }
        if !reference_cm.is_finite() || reference_cm <= 0.0 {
            return Err(MeasureError::invalid_scale(format!(
                "reference centimeter distance must be positive and finite, got {reference_cm}"
            )));
        }
        Ok(Self {
            cm_per_pixel: reference_cm / reference_px,
        })
    }

    /// Returns the ratio in centimeters per pixel.
    #[must_use]
    pub const fn cm_per_pixel(&self) -> f64 {
        self.cm_per_pixel
    }

    /// Converts an image-space distance to centimeters.
    #[must_use]
    pub fn to_cm(&self, pixels: f64) -> f64 {
        pixels * self.cm_per_pixel
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self::assumed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn assumed_scale_uses_ratio_constant() {
        let scale = PixelScale::assumed();
        assert_relative_eq!(scale.cm_per_pixel(), PIXEL_TO_CM_RATIO);
        assert_relative_eq!(scale.to_cm(100.0), 26.458_333_33);
    }

    #[test]
    fn default_is_assumed() {
        assert_eq!(PixelScale::default(), PixelScale::assumed());
    }

    #[test]
    fn from_reference_derives_ratio() {
        let scale = PixelScale::from_reference(240.0, 30.0).unwrap();
        assert_relative_eq!(scale.cm_per_pixel(), 0.125);
        assert_relative_eq!(scale.to_cm(480.0), 60.0);
    }

    #[test]
    fn from_reference_rejects_bad_input() {
        assert!(PixelScale::from_reference(0.0, 30.0).is_err());
        assert!(PixelScale::from_reference(-10.0, 30.0).is_err());
        assert!(PixelScale::from_reference(240.0, 0.0).is_err());
        assert!(PixelScale::from_reference(f64::NAN, 30.0).is_err());
        assert!(PixelScale::from_reference(240.0, f64::INFINITY).is_err());
    }
}
