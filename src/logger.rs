//! Diagnostics go through `tracing`; [`init`] installs a stderr subscriber
//! for the `--log-level` given on the command line.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::EntrySumError;

/// Install the global subscriber for `level`.
///
/// A level that does not parse falls back to the `RUST_LOG` directives. With
/// neither usable the level error is returned.
pub fn init(level: &str) -> Result<(), EntrySumError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = filter_for(level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| EntrySumError::Logger(format!("failed to set subscriber: {e}")))
}

/// Build the filter for `level`, using `rust_log` only when `level` is not
/// a known level name.
pub fn filter_for(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, EntrySumError> {
    let level_err = match parse_level(level) {
        Ok(lvl) => {
            return EnvFilter::try_new(lvl.to_string())
                .map_err(|e| EntrySumError::Logger(format!("invalid log level '{level}': {e}")))
        }
        Err(e) => e,
    };
    match rust_log.filter(|s| !s.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            EntrySumError::Logger(format!("{level_err}; RUST_LOG '{directives}' is invalid: {e}"))
        }),
        None => Err(level_err),
    }
}

/// Parse a bare level name such as `"warn"` or `"debug"`.
pub fn parse_level(level: &str) -> Result<LevelFilter, EntrySumError> {
    if level.is_empty() {
        return Err(EntrySumError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| EntrySumError::Logger(format!("unrecognised log level '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(parse_level("").is_err());
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn known_level_ignores_rust_log() {
        let filter = filter_for("warn", Some("trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn unknown_level_uses_rust_log() {
        let filter = filter_for("verbose", Some("debug")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn unknown_level_without_rust_log_errors() {
        for rust_log in [None, Some(""), Some("  ")] {
            match filter_for("verbose", rust_log) {
                Err(EntrySumError::Logger(msg)) => assert!(msg.contains("verbose")),
                other => panic!("expected logger error, got {other:?}"),
            }
        }
    }
}
