//! Conversion of ordinal ratings into triangular fuzzy numbers.

use super::types::{LikertScale, TriangularFuzzyNumber};
use crate::data::{FuzzyColumn, FuzzyTable, RatingMatrix};

/// Outcome of mapping a single rating cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MappedRating {
    /// The rating is in the scale's domain.
    Mapped(TriangularFuzzyNumber),
    /// No rating was given.
    Missing,
    /// A rating was given but lies outside `1..=points`.
    OutOfDomain(i32),
}

impl MappedRating {
    /// Classifies one raw cell against `scale`.
    pub fn classify(cell: Option<i32>, scale: LikertScale) -> Self {
        match cell {
            None => Self::Missing,
            Some(r) => match scale.lookup(r) {
                Some(tfn) => Self::Mapped(tfn),
                None => Self::OutOfDomain(r),
            },
        }
    }

    /// The fuzzy number, with both missing and out-of-domain collapsed to
    /// `None`.
    pub fn fuzzy(self) -> Option<TriangularFuzzyNumber> {
        match self {
            Self::Mapped(tfn) => Some(tfn),
            Self::Missing | Self::OutOfDomain(_) => None,
        }
    }
}

/// A rating that lies outside the scale's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfDomainCell {
    pub item: String,
    /// Zero-based expert index.
    pub expert: usize,
    pub rating: i32,
}

/// Maps every cell of `ratings` to its fuzzy number under `scale`.
///
/// Missing and out-of-domain ratings both map to `None`; callers that must
/// reject out-of-domain values check [`out_of_domain_cells`] first.
pub fn map_to_fuzzy(ratings: &RatingMatrix, scale: LikertScale) -> FuzzyTable {
    let columns = ratings
        .columns()
        .map(|(item, cells)| map_column(item, cells, scale))
        .collect();
    FuzzyTable::new(columns, ratings.experts())
}

/// Maps a single item column.
pub fn map_column(item: &str, cells: &[Option<i32>], scale: LikertScale) -> FuzzyColumn {
    FuzzyColumn {
        item: item.to_string(),
        cells: cells
            .iter()
            .map(|&cell| MappedRating::classify(cell, scale).fuzzy())
            .collect(),
    }
}

/// Lists every rating in `ratings` that `scale` cannot map.
pub fn out_of_domain_cells(ratings: &RatingMatrix, scale: LikertScale) -> Vec<OutOfDomainCell> {
    ratings
        .columns()
        .flat_map(|(item, cells)| {
            cells.iter().enumerate().filter_map(move |(expert, &cell)| {
                match MappedRating::classify(cell, scale) {
                    MappedRating::OutOfDomain(rating) => Some(OutOfDomainCell {
                        item: item.to_string(),
                        expert,
                        rating,
                    }),
                    _ => None,
                }
            })
        })
        .collect()
}
