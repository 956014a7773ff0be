//! Centroid defuzzification.

use crate::data::{FuzzyColumn, FuzzyTable, ItemValues};

/// Crisp score per item: the vertex average of the item's group-mean
/// fuzzy number.
///
/// `(a1 + a2 + a3) / 3`, where `(a1, a2, a3)` is the group mean. This is
/// the vertex centroid, not the centroid of the membership area. Items
/// with no ratings yield `None`.
pub fn defuzzify(fuzzy: &FuzzyTable) -> ItemValues<Option<f64>> {
    fuzzy
        .columns()
        .iter()
        .map(|c| (c.item.clone(), column_crisp(c)))
        .collect()
}

/// Crisp score for a single item column.
pub fn column_crisp(column: &FuzzyColumn) -> Option<f64> {
    column
        .group_mean()
        .map(|mean| mean.centroid())
        .filter(|v| v.is_finite())
}
