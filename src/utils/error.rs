use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    /// Upstream fetch failed in any way: the session has no dataset to
    /// work with and derived computation must not start.
    #[error("no usable dataset: {reason}")]
    DataUnavailable { reason: String },

    /// A query was invoked with an inverted or otherwise unusable range.
    /// Rejected, never clamped.
    #[error("invalid query range: {message}")]
    InvalidRange { message: String },

    /// A name lookup found no match in the current subset.
    #[error("country not found: {name}")]
    NotFound { name: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
