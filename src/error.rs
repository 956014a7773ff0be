//! Error taxonomy for the analysis pipeline.

/// Errors reported by validation and export.
///
/// Validation errors are raised before any computation starts, so a
/// failed call never yields partial results.
#[derive(Debug, thiserror::Error)]
pub enum DelphiError {
    /// The rating table has the wrong shape or contents.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A scalar parameter is outside its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The rating table has no experts or no items.
    #[error("empty input: {reason}")]
    EmptyInput { reason: &'static str },

    /// Writing an export failed.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DelphiError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
