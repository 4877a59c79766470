use crate::config::LoggingSettings;
use crate::error::RecommendError;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the configured level. `format` selects
/// `json`, `pretty` (multi-line) or, for anything else, compact single-line output.
/// Fails if a global subscriber is already installed.
pub fn init(settings: &LoggingSettings) -> Result<(), RecommendError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&settings.level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = match settings.format.as_str() {
        "json" => subscriber.json().try_init(),
        "pretty" => subscriber.pretty().try_init(),
        _ => subscriber.compact().try_init(),
    };

    result.map_err(|e| RecommendError::Telemetry(e.to_string()))
}

/// Parse a configured level or directive list such as `info,event_recs=debug`
pub fn level_filter(level: &str) -> Result<EnvFilter, RecommendError> {
    EnvFilter::try_new(level)
        .map_err(|e| RecommendError::Telemetry(format!("invalid log level {:?}: {}", level, e)))
}
