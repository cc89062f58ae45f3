//! Garment definitions and size charts.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A garment size label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GarmentSize {
    /// Extra small.
    #[serde(rename = "XS")]
    Xs,
    /// Small.
    #[serde(rename = "S")]
    S,
    /// Medium.
    #[serde(rename = "M")]
    M,
    /// Large.
    #[serde(rename = "L")]
    L,
    /// Extra large.
    #[serde(rename = "XL")]
    Xl,
}

impl GarmentSize {
    /// All sizes, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

impl std::fmt::Display for GarmentSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The body measurements a garment size is cut for, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarmentMeasurements {
    /// Chest circumference.
    pub chest: f64,
    /// Waist circumference.
    pub waist: f64,
    /// Hip circumference.
    pub hips: f64,
}

impl GarmentMeasurements {
    /// Creates a measurement triple.
    #[must_use]
    pub const fn new(chest: f64, waist: f64, hips: f64) -> Self {
        Self { chest, waist, hips }
    }

    /// Returns `true` if every value is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.chest, self.waist, self.hips]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// A try-on garment: identity, 3D model reference, and per-size chart.
///
/// The rendering collaborator consumes `model_path` and `default_color`;
/// this crate only carries them.
///
/// # Example
///
/// ```
/// use fit_catalog::{Garment, GarmentMeasurements, GarmentSize};
///
/// let garment = Garment::new("tshirt", "T-shirt", "/models/clothes/tshirt.glb", "#ffffff")
///     .with_size(GarmentSize::M, GarmentMeasurements::new(94.0, 78.0, 102.0));
///
/// assert_eq!(garment.sizes().count(), 1);
/// assert!(garment.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Path to the 3D model asset.
    pub model_path: PathBuf,

    /// Default render color as a hex string.
    pub default_color: String,

    /// Size chart, smallest size first.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    size_chart: BTreeMap<GarmentSize, GarmentMeasurements>,
}

impl Garment {
    /// Creates a garment with an empty size chart.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        model_path: impl Into<PathBuf>,
        default_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            model_path: model_path.into(),
            default_color: default_color.into(),
            size_chart: BTreeMap::new(),
        }
    }

    /// Adds a size to the chart.
    #[must_use]
    pub fn with_size(mut self, size: GarmentSize, measurements: GarmentMeasurements) -> Self {
        self.size_chart.insert(size, measurements);
        self
    }

    /// Returns the chart measurements for a size.
    #[must_use]
    pub fn measurements_for(&self, size: GarmentSize) -> Option<&GarmentMeasurements> {
        self.size_chart.get(&size)
    }

    /// Iterates the available sizes, smallest first.
    pub fn sizes(&self) -> impl Iterator<Item = GarmentSize> + '_ {
        self.size_chart.keys().copied()
    }

    /// Iterates `(size, measurements)` pairs, smallest first.
    pub fn size_chart(&self) -> impl Iterator<Item = (GarmentSize, &GarmentMeasurements)> {
        self.size_chart.iter().map(|(s, m)| (*s, m))
    }

    /// Validates the garment definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty, the chart is empty, or
    /// any chart entry has a non-positive or non-finite value.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(CatalogError::validation("garment id cannot be empty"));
        }
        if self.name.is_empty() {
            return Err(CatalogError::validation("garment name cannot be empty"));
        }
        if self.size_chart.is_empty() {
            return Err(CatalogError::validation(format!(
                "garment '{}' has no sizes",
                self.id
            )));
        }
        for (size, measurements) in &self.size_chart {
            if !measurements.is_valid() {
                return Err(CatalogError::validation(format!(
                    "garment '{}' size {size} has invalid measurements",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
