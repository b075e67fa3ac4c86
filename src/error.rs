use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntrySumError {
    /// Subset size outside the supported pair/triple range.
    #[error("unsupported subset size {0}, expected 2 or 3")]
    InvalidSize(usize),

    /// A value list token that is not an integer.
    #[error("parse error: {0}")]
    Parse(String),

    /// No subset of the requested size reaches the target.
    #[error("no {size} distinct entries sum to {target}")]
    NotFound { size: usize, target: i64 },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// The tracing subscriber could not be set up.
    #[error("logger error: {0}")]
    Logger(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be written.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output could not be written.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
