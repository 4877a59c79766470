//! Event Recs - ranked event recommendations for a user
//!
//! Blends four weighted signals per candidate event: collaborative similarity
//! to attended events, preference-category overlap, geographic proximity and
//! popularity. Everything runs synchronously over in-memory collections.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use crate::config::{Settings, DEFAULT_LIMIT};
pub use crate::core::{calculate_distance, get_recommended_events, haversine_distance, Recommender};
pub use error::RecommendError;
pub use models::{Event, EventId, EventSimilarity, Point, RecommendationResult, ScoredEvent, ScoringWeights, User};
