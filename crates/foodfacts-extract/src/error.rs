use foodfacts_parquet::DatasetError;
use thiserror::Error;

/// Errors that abort an extraction pass.
///
/// Configuration errors are raised before any row is read. Dataset errors
/// abort the pass and discard everything accumulated so far.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("window size must be at least 1 row, got {size}")]
    InvalidWindowSize { size: usize },

    #[error("missing required {role}")]
    MissingField { role: &'static str },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl ExtractError {
    /// True for errors caused by the pass configuration rather than the data.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidWindowSize { .. } | Self::MissingField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
