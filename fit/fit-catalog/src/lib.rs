//! Garment catalog and size-fit recommendation.
//!
//! This crate carries the try-on wardrobe:
//!
//! - [`Garment`] - identity, 3D model reference, and per-size cut chart
//! - [`Catalog`] - garment collection with JSON manifest I/O
//! - [`recommend_size`] - closest-size matching against measured bodies
//!
//! Model loading and rendering are external collaborators; the catalog only
//! carries the model path, color, and chart data they consume. Fit
//! recommendation matches a body's [`Measurements`](fit_measure::Measurements)
//! against the chart's circumference dimensions.
//!
//! # Example
//!
//! ```
//! use fit_catalog::{recommend_size, Catalog};
//! use fit_measure::Measurements;
//!
//! let catalog = Catalog::builtin();
//! let dress = catalog.get("dress").unwrap();
//!
//! let body = Measurements {
//!     shoulders: 39.0,
//!     chest: 89.5,
//!     waist: 73.0,
//!     hips: 97.0,
//!     height: 168.0,
//! };
//!
//! let rec = recommend_size(&body, dress).unwrap();
//! println!("{} fits best in {}", dress.name, rec.size);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod catalog;
mod error;
mod garment;
mod sizing;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use garment::{Garment, GarmentMeasurements, GarmentSize};
pub use sizing::{recommend_size, SizeRecommendation};
