// Core algorithm exports
pub mod distance;
pub mod recommender;
pub mod scoring;
pub mod signals;

pub use distance::{calculate_distance, haversine_distance};
pub use recommender::{get_recommended_events, Recommender};
pub use scoring::{
    calculate_content_score, calculate_event_score, calculate_geo_score,
    calculate_popularity_score, calculate_preference_score, DEFAULT_MAX_DISTANCE_KM,
};
pub use signals::UserSignals;
