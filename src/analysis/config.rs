//! Analysis configuration.

use super::consensus::{validate_threshold, DEFAULT_THRESHOLD};
use crate::error::DelphiError;
use crate::scale::LikertScale;

/// What to do with ratings outside the scale's domain, such as a 6 on a
/// 5-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutOfDomainPolicy {
    /// Treat the cell as missing. A warning is logged with the count.
    #[default]
    TreatAsMissing,
    /// Fail the run with `InvalidInput` before any computation.
    Reject,
}

/// Configuration for a Fuzzy Delphi analysis run.
///
/// # Examples
///
/// ```
/// use u_delphi::analysis::{DelphiConfig, OutOfDomainPolicy};
/// use u_delphi::scale::LikertScale;
///
/// let config = DelphiConfig::default()
///     .with_scale(LikertScale::Seven)
///     .with_consensus_threshold(0.15)
///     .with_out_of_domain(OutOfDomainPolicy::Reject);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelphiConfig {
    /// Likert scale the ratings were collected on.
    pub scale: LikertScale,

    /// Maximum distance from the group mean for an expert to count
    /// towards an item's consensus. Typical value: 0.2.
    pub consensus_threshold: f64,

    /// Handling of ratings outside `1..=points`.
    pub out_of_domain: OutOfDomainPolicy,

    /// Decimal places for published metrics. `None` keeps full precision.
    ///
    /// Rounding is applied once, after every metric has been computed.
    pub decimals: Option<u32>,

    /// Whether to process items in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for DelphiConfig {
    fn default() -> Self {
        Self {
            scale: LikertScale::Five,
            consensus_threshold: DEFAULT_THRESHOLD,
            out_of_domain: OutOfDomainPolicy::default(),
            decimals: Some(2),
            parallel: false,
        }
    }
}

impl DelphiConfig {
    pub fn with_scale(mut self, scale: LikertScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_consensus_threshold(mut self, threshold: f64) -> Self {
        self.consensus_threshold = threshold;
        self
    }

    pub fn with_out_of_domain(mut self, policy: OutOfDomainPolicy) -> Self {
        self.out_of_domain = policy;
        self
    }

    pub fn with_decimals(mut self, decimals: Option<u32>) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DelphiError> {
        validate_threshold(self.consensus_threshold)?;
        if let Some(d) = self.decimals {
            if d > 15 {
                return Err(DelphiError::invalid_parameter(
                    "decimals",
                    format!("must be at most 15, got {d}"),
                ));
            }
        }
        Ok(())
    }
}
