//! Expert rating matrix.

use crate::error::DelphiError;
use std::collections::HashSet;

/// Likert ratings given by experts (rows) to named items (columns).
///
/// Cells are `None` when an expert did not rate an item. The matrix is
/// always non-empty and rectangular once constructed; the values
/// themselves are checked against a scale only when the matrix is mapped.
///
/// Storage is column-major so that each item can be processed
/// independently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRatingMatrix")
)]
pub struct RatingMatrix {
    items: Vec<String>,
    columns: Vec<Vec<Option<i32>>>,
    experts: usize,
}

impl RatingMatrix {
    /// Builds a matrix from expert rows.
    ///
    /// `rows[e][i]` is expert `e`'s rating of `items[i]`.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if there are no items or no rows
    /// - `InvalidInput` if a row's length differs from `items.len()` or item
    ///   names are blank or duplicated
    pub fn from_rows<S: Into<String>>(
        items: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Option<i32>>>,
    ) -> Result<Self, DelphiError> {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        validate_items(&items)?;
        if rows.is_empty() {
            return Err(DelphiError::EmptyInput {
                reason: "rating matrix has no experts",
            });
        }

        let mut columns = vec![Vec::with_capacity(rows.len()); items.len()];
        for (e, row) in rows.iter().enumerate() {
            if row.len() != items.len() {
                return Err(DelphiError::invalid_input(format!(
                    "expert {} has {} ratings, expected {}",
                    e + 1,
                    row.len(),
                    items.len()
                )));
            }
            for (col, &cell) in columns.iter_mut().zip(row) {
                col.push(cell);
            }
        }

        Ok(Self {
            items,
            columns,
            experts: rows.len(),
        })
    }

    /// Builds a matrix from named item columns.
    ///
    /// Every column must have the same number of experts.
    pub fn from_columns<S: Into<String>>(
        columns: impl IntoIterator<Item = (S, Vec<Option<i32>>)>,
    ) -> Result<Self, DelphiError> {
        let (items, columns): (Vec<String>, Vec<Vec<Option<i32>>>) = columns
            .into_iter()
            .map(|(name, col)| (name.into(), col))
            .unzip();
        validate_items(&items)?;

        let experts = columns[0].len();
        if experts == 0 {
            return Err(DelphiError::EmptyInput {
                reason: "rating matrix has no experts",
            });
        }
        if let Some((name, col)) = items
            .iter()
            .zip(&columns)
            .find(|(_, col)| col.len() != experts)
        {
            return Err(DelphiError::invalid_input(format!(
                "item `{name}` has {} ratings, expected {experts}",
                col.len()
            )));
        }

        Ok(Self {
            items,
            columns,
            experts,
        })
    }

    /// Number of experts (rows).
    pub fn experts(&self) -> usize {
        self.experts
    }

    /// Number of items (columns).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Item names in column order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Ratings for the item at `index`, one per expert.
    pub fn column(&self, index: usize) -> Option<&[Option<i32>]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Iterates `(item, ratings)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<i32>])> {
        self.items
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Rating of `expert` for the item at `item`.
    pub fn get(&self, expert: usize, item: usize) -> Option<i32> {
        self.columns.get(item)?.get(expert).copied().flatten()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }
}

/// Unchecked wire form; deserialization validates it through
/// [`RatingMatrix::from_columns`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRatingMatrix {
    items: Vec<String>,
    columns: Vec<Vec<Option<i32>>>,
    experts: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRatingMatrix> for RatingMatrix {
    type Error = DelphiError;

    fn try_from(raw: RawRatingMatrix) -> Result<Self, Self::Error> {
        if raw.items.len() != raw.columns.len() {
            return Err(DelphiError::invalid_input(format!(
                "{} item names for {} columns",
                raw.items.len(),
                raw.columns.len()
            )));
        }
        let matrix = Self::from_columns(raw.items.into_iter().zip(raw.columns))?;
        if matrix.experts != raw.experts {
            return Err(DelphiError::invalid_input(format!(
                "expert count {} does not match column length {}",
                raw.experts, matrix.experts
            )));
        }
        Ok(matrix)
    }
}

fn validate_items(items: &[String]) -> Result<(), DelphiError> {
    if items.is_empty() {
        return Err(DelphiError::EmptyInput {
            reason: "rating matrix has no items",
        });
    }
    let mut seen = HashSet::with_capacity(items.len());
    for name in items {
        if name.trim().is_empty() {
            return Err(DelphiError::invalid_input("item names must not be blank"));
        }
        if !seen.insert(name.as_str()) {
            return Err(DelphiError::invalid_input(format!(
                "duplicate item name `{name}`"
            )));
        }
    }
    Ok(())
}
