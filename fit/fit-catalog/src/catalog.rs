//! Garment collections.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::garment::{Garment, GarmentMeasurements, GarmentSize};

/// An ordered collection of try-on garments.
///
/// # Example
///
/// ```
/// use fit_catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.len(), 3);
/// assert!(catalog.get("tshirt").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    garments: Vec<Garment>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            garments: Vec::new(),
        }
    }

    /// Adds a garment, builder style.
    #[must_use]
    pub fn with_garment(mut self, garment: Garment) -> Self {
        self.garments.push(garment);
        self
    }

    /// Appends a garment.
    pub fn add(&mut self, garment: Garment) {
        self.garments.push(garment);
    }

    /// Looks up a garment by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Garment> {
        self.garments.iter().find(|g| g.id == id)
    }

    /// Returns the number of garments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.garments.len()
    }

    /// Returns `true` if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    /// Iterates the garments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Garment> {
        self.garments.iter()
    }

    /// Validates every garment and checks id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first garment validation failure, or a validation error
    /// for a duplicated id.
    pub fn validate(&self) -> Result<()> {
        for garment in &self.garments {
            garment.validate()?;
        }
        for (i, garment) in self.garments.iter().enumerate() {
            if self.garments[..i].iter().any(|g| g.id == garment.id) {
                return Err(CatalogError::validation(format!(
                    "duplicate garment id '{}'",
                    garment.id
                )));
            }
        }
        Ok(())
    }

    /// Serializes the catalog to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CatalogError::from)
    }

    /// Deserializes a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CatalogError::from)
    }

    /// The stock try-on wardrobe: t-shirt, dress, and jacket.
    ///
    /// Chart values are the garments' cut measurements per size. The jacket
    /// starts at S.
    #[must_use]
    pub fn builtin() -> Self {
        let standard_chart = [
            (GarmentSize::Xs, GarmentMeasurements::new(86.0, 70.0, 94.0)),
            (GarmentSize::S, GarmentMeasurements::new(90.0, 74.0, 98.0)),
            (GarmentSize::M, GarmentMeasurements::new(94.0, 78.0, 102.0)),
            (GarmentSize::L, GarmentMeasurements::new(98.0, 82.0, 106.0)),
            (GarmentSize::Xl, GarmentMeasurements::new(102.0, 86.0, 110.0)),
        ];

        let mut tshirt = Garment::new("tshirt", "T-shirt", "/models/clothes/tshirt.glb", "#ffffff");
        let mut dress = Garment::new("dress", "Dress", "/models/clothes/dress.glb", "#000000");
        for (size, measurements) in standard_chart {
            tshirt = tshirt.with_size(size, measurements);
            dress = dress.with_size(size, measurements);
        }

        let mut jacket = Garment::new("jacket", "Jacket", "/models/clothes/jacket.glb", "#2b2b2b");
        for (size, measurements) in &standard_chart[1..] {
            jacket = jacket.with_size(*size, *measurements);
        }

        Self::new()
            .with_garment(tshirt)
            .with_garment(dress)
            .with_garment(jacket)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn builtin_jacket_has_no_xs() {
        let catalog = Catalog::builtin();
        let jacket = catalog.get("jacket").unwrap();
        assert!(jacket.measurements_for(GarmentSize::Xs).is_none());
        assert_eq!(jacket.sizes().count(), 4);

        let tshirt = catalog.get("tshirt").unwrap();
        assert_eq!(tshirt.sizes().count(), 5);
    }

    #[test]
    fn get_unknown_id() {
        assert!(Catalog::builtin().get("hat").is_none());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let garment = Garment::new("x", "X", "/models/x.glb", "#000000")
            .with_size(GarmentSize::M, GarmentMeasurements::new(94.0, 78.0, 102.0));
        let catalog = Catalog::new()
            .with_garment(garment.clone())
            .with_garment(garment);

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn catalog_json_roundtrip() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let parsed = Catalog::from_json(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn catalog_from_bad_json() {
        assert!(Catalog::from_json("not json").is_err());
    }
}
