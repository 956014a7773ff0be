//! Classification of overall analysis outcomes.

use crate::analysis::{column_consensus, AnalysisResult};
use crate::data::{mean, mean_present, DistanceColumn};

/// Maximum d-construct for the experts to count as converged.
pub const D_CONSTRUCT_LIMIT: f64 = 0.2;

/// Minimum overall consensus percentage for group agreement.
pub const CONSENSUS_LIMIT: f64 = 75.0;

/// Verdict on the overall d-construct and consensus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpretation {
    /// Both criteria met.
    Excellent,
    /// d-construct met, consensus below the limit.
    WeakConsensus,
    /// Consensus met, d-construct above the limit.
    WeakDistance,
    /// Neither criterion met.
    FurtherRoundsNeeded,
}

impl Interpretation {
    /// Classifies `result` from its full-precision distance table.
    ///
    /// The published `d_construct` and `overall_consensus` are rounded, so a
    /// d-construct of 0.2049 would read as 0.2; this recomputes both from the
    /// unrounded distances instead.
    pub fn of(result: &AnalysisResult) -> Self {
        let columns = result.distances.columns();
        let d_construct = mean_present(columns.iter().map(DistanceColumn::mean));
        let consensus: Vec<f64> = columns
            .iter()
            .map(|c| column_consensus(c, result.consensus_threshold))
            .collect();
        Self::classify(d_construct, mean(&consensus).unwrap_or(0.0))
    }

    /// Classifies a d-construct and overall consensus percentage as given.
    ///
    /// Values are compared as passed in; for an [`AnalysisResult`] use
    /// [`Interpretation::of`], which avoids judging rounded metrics.
    /// A missing d-construct never satisfies the distance criterion.
    pub fn classify(d_construct: Option<f64>, consensus: f64) -> Self {
        let d_ok = d_construct.is_some_and(|d| d <= D_CONSTRUCT_LIMIT);
        let c_ok = consensus >= CONSENSUS_LIMIT;
        match (d_ok, c_ok) {
            (true, true) => Self::Excellent,
            (true, false) => Self::WeakConsensus,
            (false, true) => Self::WeakDistance,
            (false, false) => Self::FurtherRoundsNeeded,
        }
    }

    /// Short machine-friendly label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::WeakConsensus => "weak_consensus",
            Self::WeakDistance => "weak_distance",
            Self::FurtherRoundsNeeded => "further_rounds_needed",
        }
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Excellent => {
                "Excellent: d-construct <= 0.2 and consensus >= 75%, the panel has converged"
            }
            Self::WeakConsensus => {
                "Good d-construct (<= 0.2) but consensus below 75%, consider another round"
            }
            Self::WeakDistance => {
                "Consensus >= 75% but d-construct above 0.2, opinions are still spread"
            }
            Self::FurtherRoundsNeeded => {
                "Neither criterion met, further Delphi rounds are needed"
            }
        };
        f.write_str(msg)
    }
}
