//! Size-fit recommendation.

use fit_measure::Measurements;
use serde::{Deserialize, Serialize};

use crate::garment::{Garment, GarmentSize};

/// The recommended size for a garment, with per-dimension fit deltas.
///
/// Deltas are garment minus body, in centimeters: positive means the
/// garment is roomier than the body at that dimension, negative means it
/// is tighter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRecommendation {
    /// The recommended size.
    pub size: GarmentSize,

    /// Chest delta (garment − body).
    pub chest_delta: f64,

    /// Waist delta (garment − body).
    pub waist_delta: f64,

    /// Hip delta (garment − body).
    pub hips_delta: f64,
}

impl SizeRecommendation {
    /// Total absolute deviation across the three dimensions.
    ///
    /// Lower is a closer fit; `0.0` is an exact match.
    #[must_use]
    pub fn total_deviation(&self) -> f64 {
        self.chest_delta.abs() + self.waist_delta.abs() + self.hips_delta.abs()
    }
}

/// Picks the garment size that fits a measured body best.
///
/// The best size minimizes total absolute deviation over chest, waist, and
/// hips. Ties go to the smaller size. Returns `None` when the garment has
/// no size chart. Shoulder span and height do not participate: garment
/// charts are cut against circumference dimensions only.
///
/// # Example
///
/// ```
/// use fit_catalog::{recommend_size, Catalog, GarmentSize};
/// use fit_measure::Measurements;
///
/// let body = Measurements {
///     shoulders: 41.0,
///     chest: 93.0,
///     waist: 77.0,
///     hips: 101.0,
///     height: 178.0,
/// };
///
/// let catalog = Catalog::builtin();
/// let rec = recommend_size(&body, catalog.get("tshirt").unwrap()).unwrap();
/// assert_eq!(rec.size, GarmentSize::M);
/// ```
#[must_use]
pub fn recommend_size(body: &Measurements, garment: &Garment) -> Option<SizeRecommendation> {
    garment
        .size_chart()
        .map(|(size, chart)| SizeRecommendation {
            size,
            chest_delta: chart.chest - body.chest,
            waist_delta: chart.waist - body.waist,
            hips_delta: chart.hips - body.hips,
        })
        .min_by(|a, b| {
            a.total_deviation()
                .total_cmp(&b.total_deviation())
                .then(a.size.cmp(&b.size))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::garment::GarmentMeasurements;
    use approx::assert_relative_eq;

    fn body(chest: f64, waist: f64, hips: f64) -> Measurements {
        Measurements {
            shoulders: 40.0,
            chest,
            waist,
            hips,
            height: 175.0,
        }
    }

    #[test]
    fn recommends_exact_match() {
        let catalog = Catalog::builtin();
        let tshirt = catalog.get("tshirt").unwrap();

        let rec = recommend_size(&body(94.0, 78.0, 102.0), tshirt).unwrap();
        assert_eq!(rec.size, GarmentSize::M);
        assert_relative_eq!(rec.total_deviation(), 0.0);
    }

    #[test]
    fn recommends_nearest_size() {
        let catalog = Catalog::builtin();
        let tshirt = catalog.get("tshirt").unwrap();

        let rec = recommend_size(&body(101.0, 85.0, 109.0), tshirt).unwrap();
        assert_eq!(rec.size, GarmentSize::Xl);
        assert_relative_eq!(rec.chest_delta, 1.0);
        assert_relative_eq!(rec.waist_delta, 1.0);
        assert_relative_eq!(rec.hips_delta, 1.0);
    }

    #[test]
    fn ties_go_to_the_smaller_size() {
        let garment = Garment::new("x", "X", "/models/x.glb", "#000000")
            .with_size(GarmentSize::S, GarmentMeasurements::new(90.0, 74.0, 98.0))
            .with_size(GarmentSize::M, GarmentMeasurements::new(94.0, 78.0, 102.0));

        // Exactly between S and M on every dimension.
        let rec = recommend_size(&body(92.0, 76.0, 100.0), &garment).unwrap();
        assert_eq!(rec.size, GarmentSize::S);
    }

    #[test]
    fn respects_missing_sizes() {
        let catalog = Catalog::builtin();
        let jacket = catalog.get("jacket").unwrap();

        // A body the t-shirt would put in XS lands in the jacket's S.
        let rec = recommend_size(&body(86.0, 70.0, 94.0), jacket).unwrap();
        assert_eq!(rec.size, GarmentSize::S);
    }

    #[test]
    fn empty_chart_gives_no_recommendation() {
        let bare = Garment::new("x", "X", "/models/x.glb", "#000000");
        assert!(recommend_size(&body(94.0, 78.0, 102.0), &bare).is_none());
    }

    #[test]
    fn deltas_are_garment_minus_body() {
        let garment = Garment::new("x", "X", "/models/x.glb", "#000000")
            .with_size(GarmentSize::M, GarmentMeasurements::new(94.0, 78.0, 102.0));

        let rec = recommend_size(&body(96.0, 74.0, 102.0), &garment).unwrap();
        assert_relative_eq!(rec.chest_delta, -2.0); // tighter
        assert_relative_eq!(rec.waist_delta, 4.0); // roomier
        assert_relative_eq!(rec.hips_delta, 0.0);
    }
}
