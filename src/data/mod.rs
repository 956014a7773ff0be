//! Tabular data flowing through the pipeline.
//!
//! - [`RatingMatrix`]: validated input, experts × items
//! - [`FuzzyTable`]: one triangular fuzzy number per cell
//! - [`DistanceTable`]: one distance per cell
//! - [`ItemValues`]: ordered per-item scalars (d-values, consensus, ranks)
//!
//! All tables are column-major and keep item names alongside their data,
//! so no column-name parsing is needed to recover which triple belongs to
//! which item.

mod matrix;
mod tables;

pub use matrix::RatingMatrix;
pub use tables::{DistanceColumn, DistanceTable, FuzzyColumn, FuzzyTable, ItemValues};

pub(crate) use tables::{mean, mean_present};
