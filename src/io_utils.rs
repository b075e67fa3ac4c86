//! Error reporting for the command line binary.
use thiserror::Error;

use crate::EntrySumError;

/// A library error tagged with the CLI step that failed and a hint for the
/// user. Displays as `<context>: <hint>`.
#[derive(Error, Debug)]
#[error("{context}: {hint}")]
pub struct CliError {
    pub context: &'static str,
    pub hint: String,
    #[source]
    pub source: EntrySumError,
}

impl CliError {
    pub fn new(context: &'static str, err: EntrySumError) -> Self {
        Self {
            context,
            hint: cli_hint(&err),
            source: err,
        }
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &EntrySumError) -> String {
    use EntrySumError::*;
    match err {
        InvalidSize(n) => format!("size {n} is not supported. Use --size 2 or --size 3."),
        Parse(msg) => format!("{msg}. Pass integers separated by commas."),
        NotFound { size, target } => {
            format!("no {size} distinct values sum to {target}. Try another target.")
        }
        Config(msg) => format!("{msg}. Invalid configuration."),
        Logger(msg) => format!("{msg}. Use --log-level off|error|warn|info|debug|trace or set RUST_LOG."),
        Io(io) => format!("{io}"),
        Json(e) => format!("{e}"),
        Csv(e) => format!("{e}"),
    }
}
