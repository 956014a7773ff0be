//! Fuzzy Delphi analysis pipeline.
//!
//! Each stage is a free function over the tables in [`crate::data`], so
//! the stages can be used on their own:
//!
//! 1. [`crate::scale::map_to_fuzzy`]: ratings → triangular fuzzy numbers
//! 2. [`calculate_distance`]: per-expert distance from the group mean
//! 3. [`calculate_consensus`]: share of experts within a threshold
//! 4. [`defuzzify`]: vertex centroid of the group mean
//! 5. [`rank_items`]: descending rank with averaged ties
//!
//! [`DelphiRunner`] validates the input and chains all stages, producing
//! an [`AnalysisResult`] with the overall d-construct and consensus.
//!
//! # References
//!
//! - Chen (2000), "Extensions of the TOPSIS for group decision-making
//!   under fuzzy environment" (vertex distance)
//! - Chang, Hsu & Chang (2011), "Fuzzy Delphi method for evaluating
//!   hydrogen production technologies"

mod config;
mod consensus;
mod defuzzify;
mod distance;
mod rank;
mod runner;
mod types;

pub use config::{DelphiConfig, OutOfDomainPolicy};
pub use consensus::{calculate_consensus, column_consensus, DEFAULT_THRESHOLD};
pub use defuzzify::{column_crisp, defuzzify};
pub use distance::{calculate_distance, column_distances, item_d_values};
pub use rank::{rank_items, RANK_EPSILON};
pub use runner::{run, DelphiRunner};
pub use types::{AnalysisResult, ItemSummary};
