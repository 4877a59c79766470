use crate::models::EventId;
use thiserror::Error;

/// Errors that can occur when preparing or running a recommendation
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Invalid location for {owner}: lat={lat}, lng={lng}")]
    InvalidLocation { owner: String, lat: f64, lng: f64 },

    #[error("Invalid popularity for event {event_id}: {popularity}")]
    InvalidPopularity { event_id: EventId, popularity: f64 },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging initialisation failed: {0}")]
    Telemetry(String),
}
