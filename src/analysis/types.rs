//! Analysis output types.

use crate::data::{DistanceTable, FuzzyTable, ItemValues};
use crate::scale::{LikertScale, TriangularFuzzyNumber};

/// Published metrics for one item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSummary {
    pub item: String,

    /// Mean distance of the experts from the group mean. Lower means more
    /// agreement. `None` if nobody rated the item.
    pub d_value: Option<f64>,

    /// Percentage of all experts within the consensus threshold.
    pub consensus: f64,

    /// Vertex centroid of the group-mean fuzzy number.
    pub defuzzified: Option<f64>,

    /// Rank by descending defuzzified value, ties averaged.
    pub rank: Option<f64>,
}

/// Result of a Fuzzy Delphi analysis.
///
/// Tables are kept at full precision; per-item and overall metrics are
/// rounded to the configured number of decimals. Ranks are always derived
/// from unrounded scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// Scale the ratings were mapped with.
    pub scale: LikertScale,

    /// Threshold used for consensus.
    pub consensus_threshold: f64,

    /// Number of experts in the input.
    pub experts: usize,

    /// Fuzzy number per expert and item.
    pub fuzzy: FuzzyTable,

    /// Distance per expert and item.
    pub distances: DistanceTable,

    /// Group-mean fuzzy number per item.
    pub group_means: ItemValues<Option<TriangularFuzzyNumber>>,

    /// Per-item metrics, in input column order.
    pub items: Vec<ItemSummary>,

    /// Mean of the item d-values (the d-construct).
    pub d_construct: Option<f64>,

    /// Mean of the item consensus percentages.
    pub overall_consensus: f64,
}

impl AnalysisResult {
    /// Summary for `item`, if present.
    pub fn item(&self, item: &str) -> Option<&ItemSummary> {
        self.items.iter().find(|s| s.item == item)
    }

    pub fn d_values(&self) -> ItemValues<Option<f64>> {
        self.collect(|s| s.d_value)
    }

    pub fn consensus(&self) -> ItemValues<f64> {
        self.collect(|s| s.consensus)
    }

    pub fn defuzzified(&self) -> ItemValues<Option<f64>> {
        self.collect(|s| s.defuzzified)
    }

    pub fn ranks(&self) -> ItemValues<Option<f64>> {
        self.collect(|s| s.rank)
    }

    /// Item summaries ordered by rank, unranked items last.
    pub fn ranking(&self) -> Vec<&ItemSummary> {
        let mut ordered: Vec<&ItemSummary> = self.items.iter().collect();
        ordered.sort_by(|a, b| match (a.rank, b.rank) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        ordered
    }

    fn collect<T>(&self, f: impl Fn(&ItemSummary) -> T) -> ItemValues<T> {
        self.items.iter().map(|s| (s.item.clone(), f(s))).collect()
    }
}
