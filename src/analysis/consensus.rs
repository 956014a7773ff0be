//! Consensus percentage per item.

use crate::data::{DistanceColumn, DistanceTable, ItemValues};
use crate::error::DelphiError;

/// Default distance threshold for an expert to count towards consensus.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Percentage of experts whose distance is at or below `threshold`, per
/// item.
///
/// The denominator is the total number of experts, so missing distances
/// count against consensus. An item nobody rated scores 0%.
///
/// # Errors
///
/// `InvalidParameter` if `threshold` is negative or not finite.
pub fn calculate_consensus(
    distances: &DistanceTable,
    threshold: f64,
) -> Result<ItemValues<f64>, DelphiError> {
    validate_threshold(threshold)?;
    Ok(distances
        .columns()
        .iter()
        .map(|c| (c.item.clone(), column_consensus(c, threshold)))
        .collect())
}

/// Consensus percentage for a single item column.
///
/// `threshold` is assumed valid.
pub fn column_consensus(column: &DistanceColumn, threshold: f64) -> f64 {
    let total = column.distances.len();
    if total == 0 {
        return 0.0;
    }
    let agreeing = column
        .distances
        .iter()
        .flatten()
        .filter(|&&d| d <= threshold)
        .count();
    agreeing as f64 / total as f64 * 100.0
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), DelphiError> {
    if !threshold.is_finite() {
        return Err(DelphiError::invalid_parameter(
            "consensus_threshold",
            format!("must be finite, got {threshold}"),
        ));
    }
    if threshold < 0.0 {
        return Err(DelphiError::invalid_parameter(
            "consensus_threshold",
            format!("must be non-negative, got {threshold}"),
        ));
    }
    Ok(())
}
