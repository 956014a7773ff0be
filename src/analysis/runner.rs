//! Pipeline execution.
//!
//! [`DelphiRunner`] validates the input, then runs every stage in order:
//! mapping → distance → consensus → defuzzification → ranking → summary.

use super::config::{DelphiConfig, OutOfDomainPolicy};
use super::consensus::column_consensus;
use super::defuzzify::column_crisp;
use super::distance::column_distances;
use super::rank::rank_items;
use super::types::{AnalysisResult, ItemSummary};
use crate::data::{mean, mean_present, DistanceTable, FuzzyTable, ItemValues, RatingMatrix};
use crate::error::DelphiError;
use crate::scale::{map_column, out_of_domain_cells, LikertScale};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes a Fuzzy Delphi analysis.
///
/// # Usage
///
/// ```
/// use u_delphi::analysis::{DelphiConfig, DelphiRunner};
/// use u_delphi::data::RatingMatrix;
///
/// let ratings = RatingMatrix::from_columns([
///     ("Item1", vec![Some(5), Some(4), Some(5), Some(3)]),
///     ("Item2", vec![Some(4), Some(5), Some(4), Some(4)]),
/// ])
/// .unwrap();
///
/// let result = DelphiRunner::run(&ratings, &DelphiConfig::default()).unwrap();
/// assert_eq!(result.item("Item2").unwrap().consensus, 100.0);
/// ```
pub struct DelphiRunner;

impl DelphiRunner {
    /// Runs the analysis.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the configuration is invalid
    /// - `InvalidInput` if the policy is [`OutOfDomainPolicy::Reject`] and
    ///   a rating lies outside the scale
    pub fn run(
        ratings: &RatingMatrix,
        config: &DelphiConfig,
    ) -> Result<AnalysisResult, DelphiError> {
        config.validate()?;
        check_domain(ratings, config)?;

        let scale = config.scale;
        let experts = ratings.experts();

        // 1. Scale mapping
        let raw: Vec<(&str, &[Option<i32>])> = ratings.columns().collect();
        let fuzzy = FuzzyTable::new(
            per_item(&raw, config.parallel, |(item, cells)| {
                map_column(item, cells, scale)
            }),
            experts,
        );
        tracing::debug!(
            experts,
            items = fuzzy.item_count(),
            scale = scale.points(),
            "mapped ratings to fuzzy numbers"
        );

        // 2. Distances
        let distances = DistanceTable::new(
            per_item(fuzzy.columns(), config.parallel, column_distances),
            experts,
        );
        let d_values: Vec<Option<f64>> =
            per_item(distances.columns(), config.parallel, |c| c.mean());
        tracing::debug!(items = d_values.len(), "computed expert distances");

        // 3. Consensus
        let threshold = config.consensus_threshold;
        let consensus: Vec<f64> = per_item(distances.columns(), config.parallel, |c| {
            column_consensus(c, threshold)
        });

        // 4. Defuzzification
        let crisp: ItemValues<Option<f64>> = ratings
            .items()
            .iter()
            .cloned()
            .zip(per_item(fuzzy.columns(), config.parallel, column_crisp))
            .collect();

        // 5. Ranking
        let ranks = rank_items(&crisp);
        tracing::debug!(threshold, "scored consensus and ranked items");

        // 6. Summary
        let d_construct = mean_present(d_values.iter().copied());
        let overall_consensus = mean(&consensus).unwrap_or(0.0);

        let round = |v: f64| round_to(v, config.decimals);
        let items = ratings
            .items()
            .iter()
            .zip(&d_values)
            .zip(&consensus)
            .zip(crisp.values().zip(ranks.values()))
            .map(|(((item, d), c), (x, r))| ItemSummary {
                item: item.clone(),
                d_value: d.map(round),
                consensus: round(*c),
                defuzzified: x.map(round),
                rank: *r,
            })
            .collect();

        let result = AnalysisResult {
            scale,
            consensus_threshold: threshold,
            experts,
            group_means: fuzzy.group_means(),
            fuzzy,
            distances,
            items,
            d_construct: d_construct.map(round),
            overall_consensus: round(overall_consensus),
        };

        tracing::info!(
            experts,
            items = result.items.len(),
            d_construct = ?result.d_construct,
            consensus = result.overall_consensus,
            "fuzzy delphi analysis complete"
        );

        Ok(result)
    }
}

/// Runs the analysis with default settings apart from the scale and
/// threshold.
///
/// `scale_points` must be 5 or 7.
///
/// # Examples
///
/// ```
/// use u_delphi::analysis::run;
/// use u_delphi::data::RatingMatrix;
///
/// let ratings = RatingMatrix::from_rows(["Q1"], vec![vec![Some(6)], vec![Some(7)]]).unwrap();
/// let result = run(&ratings, 7, 0.2).unwrap();
/// assert_eq!(result.items[0].rank, Some(1.0));
///
/// assert!(run(&ratings, 6, 0.2).is_err());
/// ```
pub fn run(
    ratings: &RatingMatrix,
    scale_points: u32,
    consensus_threshold: f64,
) -> Result<AnalysisResult, DelphiError> {
    let config = DelphiConfig::default()
        .with_scale(LikertScale::from_points(scale_points)?)
        .with_consensus_threshold(consensus_threshold);
    DelphiRunner::run(ratings, &config)
}

fn check_domain(ratings: &RatingMatrix, config: &DelphiConfig) -> Result<(), DelphiError> {
    let cells = out_of_domain_cells(ratings, config.scale);
    let Some(first) = cells.first() else {
        return Ok(());
    };

    match config.out_of_domain {
        OutOfDomainPolicy::Reject => Err(DelphiError::invalid_input(format!(
            "rating {} by expert {} on item `{}` is outside the {} scale",
            first.rating,
            first.expert + 1,
            first.item,
            config.scale
        ))),
        OutOfDomainPolicy::TreatAsMissing => {
            tracing::warn!(
                count = cells.len(),
                scale = config.scale.points(),
                "out-of-domain ratings treated as missing"
            );
            Ok(())
        }
    }
}

/// Applies `f` to every item, in parallel when enabled.
///
/// Items are independent, so the output order always matches the input.
#[cfg(feature = "parallel")]
fn per_item<T, U, F>(items: &[T], parallel: bool, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if parallel {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn per_item<T, U, F>(items: &[T], _parallel: bool, f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Rounds half away from zero to `decimals` places.
fn round_to(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        Some(d) => {
            let factor = 10f64.powi(d as i32);
            (value * factor).round() / factor
        }
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> RatingMatrix {
        RatingMatrix::from_columns([
            ("Item1", vec![Some(5), Some(4), Some(5), Some(3)]),
            ("Item2", vec![Some(4), Some(5), Some(4), Some(4)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario_metrics() {
        let config = DelphiConfig::default().with_decimals(None);
        let result = DelphiRunner::run(&scenario(), &config).unwrap();

        let item1 = result.item("Item1").unwrap();
        assert!((item1.d_value.unwrap() - 0.15).abs() < 1e-10);
        assert!((item1.consensus - 75.0).abs() < 1e-10);
        assert!((item1.defuzzified.unwrap() - 0.65).abs() < 1e-10);

        let item2 = result.item("Item2").unwrap();
        assert!((item2.d_value.unwrap() - 0.075).abs() < 1e-10);
        assert!((item2.consensus - 100.0).abs() < 1e-10);
        assert!((item2.defuzzified.unwrap() - 0.65).abs() < 1e-10);

        // Both items sum to 17 rating points and tie.
        assert_eq!(item1.rank, Some(1.5));
        assert_eq!(item2.rank, Some(1.5));

        assert!((result.d_construct.unwrap() - 0.1125).abs() < 1e-10);
        assert!((result.overall_consensus - 87.5).abs() < 1e-10);
    }

    #[test]
    fn test_published_rounding() {
        let result = DelphiRunner::run(&scenario(), &DelphiConfig::default()).unwrap();
        assert_eq!(result.d_construct, Some(0.11));
        assert_eq!(result.overall_consensus, 87.5);
    }

    #[test]
    fn test_tables_keep_full_precision() {
        let result = DelphiRunner::run(&scenario(), &DelphiConfig::default()).unwrap();
        let d = result.distances.column("Item1").unwrap();
        assert!((d.distances[3].unwrap() - 0.25).abs() < 1e-12);
        let mean = result.group_means.get("Item1").unwrap().unwrap();
        assert!((mean.m1 - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_reject_out_of_domain() {
        let ratings =
            RatingMatrix::from_columns([("Q", vec![Some(3), Some(6)])]).unwrap();
        let config = DelphiConfig::default().with_out_of_domain(OutOfDomainPolicy::Reject);
        let err = DelphiRunner::run(&ratings, &config).unwrap_err();
        assert!(matches!(err, DelphiError::InvalidInput { .. }));
        assert!(err.to_string().contains("expert 2"));

        let lenient = DelphiRunner::run(&ratings, &DelphiConfig::default()).unwrap();
        assert_eq!(lenient.distances.get(1, 0), None);
        assert!((lenient.item("Q").unwrap().consensus - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            run(&scenario(), 4, 0.2),
            Err(DelphiError::InvalidParameter { name: "scale", .. })
        ));
        assert!(matches!(
            run(&scenario(), 5, f64::NAN),
            Err(DelphiError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_all_missing_item() {
        let ratings = RatingMatrix::from_columns([
            ("Q1", vec![Some(5), Some(4)]),
            ("Q2", vec![None, None]),
        ])
        .unwrap();
        let result = DelphiRunner::run(&ratings, &DelphiConfig::default()).unwrap();
        let q2 = result.item("Q2").unwrap();
        assert_eq!(q2.d_value, None);
        assert_eq!(q2.consensus, 0.0);
        assert_eq!(q2.defuzzified, None);
        assert_eq!(q2.rank, None);

        // d-construct ignores the missing item; consensus averages both.
        assert_eq!(result.d_construct, result.item("Q1").unwrap().d_value);
        assert_eq!(result.overall_consensus, 50.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.1125, Some(2)), 0.11);
        assert_eq!(round_to(87.456, Some(1)), 87.5);
        assert_eq!(round_to(0.123456, None), 0.123456);
    }

    #[test]
    fn test_parallel_flag_same_result() {
        let seq = DelphiRunner::run(&scenario(), &DelphiConfig::default()).unwrap();
        let par = DelphiRunner::run(&scenario(), &DelphiConfig::default().with_parallel(true))
            .unwrap();
        assert_eq!(seq, par);
    }
}
