//! Ranking of items by crisp score.

use crate::data::ItemValues;
use std::cmp::Ordering;

/// Absolute tolerance under which two crisp scores are treated as tied.
pub const RANK_EPSILON: f64 = 1e-9;

/// Ranks items by descending crisp score; the highest score is rank 1.
///
/// Tied items share the average of the positions they span, so values
/// `[10, 8, 8, 5]` rank as `[1, 2.5, 2.5, 4]`. Items with a missing score
/// keep their place in the output with a missing rank and do not occupy
/// a position.
///
/// # Examples
///
/// ```
/// use u_delphi::analysis::rank_items;
/// use u_delphi::data::ItemValues;
///
/// let crisp = ItemValues::new(vec![
///     ("A".to_string(), Some(0.4)),
///     ("B".to_string(), Some(0.7)),
///     ("C".to_string(), None),
/// ]);
/// let ranks = rank_items(&crisp);
/// assert_eq!(ranks.get("B"), Some(&Some(1.0)));
/// assert_eq!(ranks.get("A"), Some(&Some(2.0)));
/// assert_eq!(ranks.get("C"), Some(&None));
/// ```
pub fn rank_items(crisp: &ItemValues<Option<f64>>) -> ItemValues<Option<f64>> {
    let ranks = average_ranks_desc(&crisp.values().copied().collect::<Vec<_>>());
    crisp
        .items()
        .map(str::to_string)
        .zip(ranks)
        .collect()
}

fn average_ranks_desc(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut order: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.filter(|x| x.is_finite()).map(|x| (i, x)))
        .collect();

    // Stable, so equal scores keep input order.
    order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut ranks = vec![None; values.len()];
    let mut start = 0;
    while start < order.len() {
        let head = order[start].1;
        let mut end = start + 1;
        while end < order.len() && (head - order[end].1).abs() <= RANK_EPSILON {
            end += 1;
        }
        // Positions start+1 ..= end share their average.
        let rank = (start + 1 + end) as f64 / 2.0;
        for &(idx, _) in &order[start..end] {
            ranks[idx] = Some(rank);
        }
        start = end;
    }
    ranks
}
