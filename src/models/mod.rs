// Model exports
pub mod domain;

pub use domain::{
    Event, EventId, EventSimilarity, Point, PopularityBounds, RecommendationResult,
    ScoreBreakdown, ScoredEvent, ScoringWeights, User,
};
