use thiserror::Error;

/// Errors reported by this crate.
///
/// Everything the clustering core can fail with is an [`KMeansError::InvalidArgument`]: a violated
/// precondition detected synchronously at the call site. The remaining variants are only produced by
/// the [`crate::dataset`] loader.
#[derive(Debug, Error)]
pub enum KMeansError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}, column {column}: could not parse {value:?} as a number")]
    Parse { line: usize, column: usize, value: String },
}

impl KMeansError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        KMeansError::InvalidArgument(msg.into())
    }

    /// Whether this error is a caller precondition violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, KMeansError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, KMeansError>;
