//! Body measurement record.

use serde::{Deserialize, Serialize};

/// A flat set of body measurements, in centimeters.
///
/// Produced fresh by each estimator call and owned by the caller once
/// returned; the estimator keeps no cross-call state. All fields are
/// non-negative for physically valid input.
///
/// # Example
///
/// ```
/// use fit_measure::Measurements;
///
/// let m = Measurements {
///     shoulders: 42.0,
///     chest: 94.0,
///     waist: 78.0,
///     hips: 102.0,
///     height: 172.0,
/// };
/// assert!(m.is_physical());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    /// Shoulder span.
    pub shoulders: f64,

    /// Chest circumference proxy.
    pub chest: f64,

    /// Waist circumference proxy.
    pub waist: f64,

    /// Hip circumference proxy.
    pub hips: f64,

    /// Standing height.
    pub height: f64,
}

impl Measurements {
    /// Field labels paired with values, in display order.
    #[must_use]
    pub const fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("shoulders", self.shoulders),
            ("chest", self.chest),
            ("waist", self.waist),
            ("hips", self.hips),
            ("height", self.height),
        ]
    }

    /// Returns `true` if every field is finite and non-negative.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.labeled()
            .iter()
            .all(|(_, v)| v.is_finite() && *v >= 0.0)
    }
}
