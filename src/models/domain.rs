use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are usable numbers (range is not checked)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Event identifier, either numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Int(i64),
    Str(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Int(id) => write!(f, "{}", id),
            EventId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        EventId::Int(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId::Str(id.to_string())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        EventId::Str(id)
    }
}

/// Candidate event with its categories, popularity and venue location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub categories: Vec<String>,
    pub popularity: f64,
    pub location: Point,
}

/// User attendance history, category preferences and home location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Duplicates are kept; each occurrence counts towards collaborative scores
    #[serde(rename = "attendedEvents", default)]
    pub attended_events: Vec<EventId>,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub location: Point,
}

/// Lookup table from an event to the events deemed similar to it
pub type EventSimilarity = HashMap<EventId, Vec<EventId>>;

/// Weighted contribution of each signal to a candidate's total score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub content: f64,
    pub preference: f64,
    pub geo: f64,
    pub popularity: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.content + self.preference + self.geo + self.popularity
    }
}

/// Scored recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvent {
    pub event: Event,
    pub score: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub breakdown: ScoreBreakdown,
}

/// Min-max bounds used to normalise popularity
///
/// The floor never rises above 0 and the ceiling never drops below 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularityBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for PopularityBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub content: f64,
    pub preference: f64,
    pub geo: f64,
    pub popularity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            content: 0.3,
            preference: 0.4,
            geo: 0.2,
            popularity: 0.1,
        }
    }
}

/// Ranked output of a recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<ScoredEvent>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

impl RecommendationResult {
    pub fn into_events(self) -> Vec<Event> {
        self.recommendations.into_iter().map(|scored| scored.event).collect()
    }
}
