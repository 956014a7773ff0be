//! Synthetic rating data.
//!
//! Generates panels of expert ratings with controllable agreement and
//! missingness, for demonstrations, tests and benchmarks.

use crate::data::RatingMatrix;
use crate::error::DelphiError;
use crate::scale::LikertScale;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for [`generate_sample`].
///
/// # Examples
///
/// ```
/// use u_delphi::sample::{generate_sample, SampleConfig};
///
/// let config = SampleConfig::default().with_experts(12).with_items(6).with_seed(7);
/// let ratings = generate_sample(&config).unwrap();
/// assert_eq!(ratings.experts(), 12);
/// assert_eq!(ratings.item_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Number of experts (rows).
    pub experts: usize,

    /// Number of items (columns), named `Item1..ItemN`.
    pub items: usize,

    /// Scale to draw ratings from.
    pub scale: LikertScale,

    /// Maximum deviation, in scale points, of an expert's rating from the
    /// item's centre rating. 0 means unanimous panels.
    pub spread: u32,

    /// Probability that a cell is left missing, in `[0, 1)`.
    pub missing_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            experts: 10,
            items: 5,
            scale: LikertScale::Five,
            spread: 1,
            missing_rate: 0.0,
            seed: None,
        }
    }
}

impl SampleConfig {
    pub fn with_experts(mut self, n: usize) -> Self {
        self.experts = n;
        self
    }

    pub fn with_items(mut self, n: usize) -> Self {
        self.items = n;
        self
    }

    pub fn with_scale(mut self, scale: LikertScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_spread(mut self, spread: u32) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_missing_rate(mut self, rate: f64) -> Self {
        self.missing_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DelphiError> {
        if self.experts == 0 {
            return Err(DelphiError::invalid_parameter("experts", "must be positive"));
        }
        if self.items == 0 {
            return Err(DelphiError::invalid_parameter("items", "must be positive"));
        }
        if !(0.0..1.0).contains(&self.missing_rate) {
            return Err(DelphiError::invalid_parameter(
                "missing_rate",
                format!("must be in [0, 1), got {}", self.missing_rate),
            ));
        }
        Ok(())
    }
}

/// Generates a rating matrix.
///
/// Each item gets a centre rating drawn uniformly from the scale; every
/// expert rates within `spread` points of it, clamped to the scale.
/// Identical seeds produce identical matrices.
pub fn generate_sample(config: &SampleConfig) -> Result<RatingMatrix, DelphiError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let points = config.scale.points() as i32;
    let spread = config.spread.min(points as u32) as i32;

    let columns: Vec<(String, Vec<Option<i32>>)> = (1..=config.items)
        .map(|i| {
            let centre = rng.random_range(1..=points);
            let cells = (0..config.experts)
                .map(|_| {
                    if config.missing_rate > 0.0 && rng.random_bool(config.missing_rate) {
                        return None;
                    }
                    let offset = rng.random_range(-spread..=spread);
                    Some((centre + offset).clamp(1, points))
                })
                .collect();
            (format!("Item{i}"), cells)
        })
        .collect();

    tracing::debug!(
        experts = config.experts,
        items = config.items,
        scale = points,
        "generated sample ratings"
    );

    RatingMatrix::from_columns(columns)
}
