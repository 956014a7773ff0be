//! Intermediate tables produced by the pipeline.

use crate::scale::TriangularFuzzyNumber;

/// An order-preserving mapping from item name to a value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemValues<T> {
    entries: Vec<(String, T)>,
}

impl<T> ItemValues<T> {
    pub fn new(entries: Vec<(String, T)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for `item`, if the item exists.
    pub fn get(&self, item: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Applies `f` to every value, keeping item order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ItemValues<U> {
        ItemValues {
            entries: self
                .entries
                .iter()
                .map(|(name, v)| (name.clone(), f(v)))
                .collect(),
        }
    }
}

impl<T> FromIterator<(String, T)> for ItemValues<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Fuzzy numbers for one item, one cell per expert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzyColumn {
    pub item: String,
    pub cells: Vec<Option<TriangularFuzzyNumber>>,
}

impl FuzzyColumn {
    /// Group-mean fuzzy number over the present cells.
    pub fn group_mean(&self) -> Option<TriangularFuzzyNumber> {
        TriangularFuzzyNumber::mean(&self.cells)
    }
}

/// Output of the scale mapper: one `(m1, m2, m3)` triple per expert and
/// item, grouped by source item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzyTable {
    columns: Vec<FuzzyColumn>,
    experts: usize,
}

impl FuzzyTable {
    pub(crate) fn new(columns: Vec<FuzzyColumn>, experts: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.cells.len() == experts));
        Self { columns, experts }
    }

    pub fn experts(&self) -> usize {
        self.experts
    }

    pub fn item_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[FuzzyColumn] {
        &self.columns
    }

    /// Column for `item`, if present.
    pub fn column(&self, item: &str) -> Option<&FuzzyColumn> {
        self.columns.iter().find(|c| c.item == item)
    }

    /// Fuzzy number of `expert` for the item at column `item`.
    pub fn get(&self, expert: usize, item: usize) -> Option<TriangularFuzzyNumber> {
        self.columns.get(item)?.cells.get(expert).copied().flatten()
    }

    /// Group-mean fuzzy number per item.
    pub fn group_means(&self) -> ItemValues<Option<TriangularFuzzyNumber>> {
        self.columns
            .iter()
            .map(|c| (c.item.clone(), c.group_mean()))
            .collect()
    }
}

/// Distances of each expert from one item's group mean.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceColumn {
    pub item: String,
    pub distances: Vec<Option<f64>>,
}

impl DistanceColumn {
    /// Mean distance over the present cells (the item's d-value).
    pub fn mean(&self) -> Option<f64> {
        mean_present(self.distances.iter().copied())
    }
}

/// One distance per expert and item, same shape as the rating matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable {
    columns: Vec<DistanceColumn>,
    experts: usize,
}

impl DistanceTable {
    pub(crate) fn new(columns: Vec<DistanceColumn>, experts: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.distances.len() == experts));
        Self { columns, experts }
    }

    pub fn experts(&self) -> usize {
        self.experts
    }

    pub fn item_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[DistanceColumn] {
        &self.columns
    }

    pub fn column(&self, item: &str) -> Option<&DistanceColumn> {
        self.columns.iter().find(|c| c.item == item)
    }

    pub fn get(&self, expert: usize, item: usize) -> Option<f64> {
        self.columns.get(item)?.distances.get(expert).copied().flatten()
    }

    /// Distances of one expert across all items, in column order.
    pub fn expert_row(&self, expert: usize) -> Vec<Option<f64>> {
        self.columns
            .iter()
            .map(|c| c.distances.get(expert).copied().flatten())
            .collect()
    }
}

/// Mean of the present values; `None` if nothing is present.
pub(crate) fn mean_present(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.into_iter().flatten().collect();
    mean(&present)
}

/// Arithmetic mean with a second correction pass over the residuals.
///
/// The correction makes the mean of identical values exactly that value.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let m = values.iter().sum::<f64>() / n;
    let residual: f64 = values.iter().map(|v| v - m).sum();
    Some(m + residual / n)
}
