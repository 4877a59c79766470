use crate::config::{Settings, DEFAULT_LIMIT};
use crate::core::{
    scoring::{calculate_event_score, DEFAULT_MAX_DISTANCE_KM},
    signals::UserSignals,
};
use crate::error::RecommendError;
use crate::models::{
    Event, EventSimilarity, Point, RecommendationResult, ScoredEvent, ScoringWeights, User,
};

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Input validation
/// 2. Attended-event filtering
/// 3. Signal preparation (collaborative counts, preferences, popularity bounds)
/// 4. Per-candidate scoring
/// 5. Stable descending sort and truncation
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    max_distance_km: f64,
    default_limit: usize,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            ..Self::with_default_weights()
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Build a recommender from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self, RecommendError> {
        settings.check()?;

        Ok(Self {
            weights: ScoringWeights::from(&settings.scoring.weights),
            max_distance_km: settings.recommendation.max_distance_km,
            default_limit: settings.recommendation.default_limit,
        })
    }

    /// Distance (km) beyond which events get no proximity credit
    ///
    /// The cap must be a positive number; zero would divide the geo score by zero.
    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Result<Self, RecommendError> {
        if max_distance_km.is_nan() || max_distance_km <= 0.0 {
            return Err(RecommendError::InvalidSettings(format!(
                "max_distance_km must be positive, got {}",
                max_distance_km
            )));
        }

        self.max_distance_km = max_distance_km;
        Ok(self)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Recommend events for a user, best first
    ///
    /// # Arguments
    /// * `user` - Attendance history, preferences and location
    /// * `events` - Full event catalog, attended events included
    /// * `similarity` - Similar-event lookup table
    /// * `limit` - Maximum number of events to return; `None` uses the default (5)
    pub fn recommend(
        &self,
        user: &User,
        events: &[Event],
        similarity: &EventSimilarity,
        limit: Option<usize>,
    ) -> Result<Vec<Event>, RecommendError> {
        self.recommend_scored(user, events, similarity, limit)
            .map(RecommendationResult::into_events)
    }

    /// Same as [`Recommender::recommend`], keeping scores and distances
    pub fn recommend_scored(
        &self,
        user: &User,
        events: &[Event],
        similarity: &EventSimilarity,
        limit: Option<usize>,
    ) -> Result<RecommendationResult, RecommendError> {
        validate_inputs(user, events)?;

        let limit = limit.unwrap_or(self.default_limit);
        let signals = UserSignals::collect(user, events, similarity);

        tracing::debug!(
            "Scoring {} events for user with {} attended, {} preferences, popularity bounds [{}, {}]",
            events.len(),
            signals.attended_count,
            signals.preference_count,
            signals.popularity.min,
            signals.popularity.max,
        );

        let mut scored: Vec<ScoredEvent> = events
            .iter()
            .filter(|event| !signals.has_attended(event))
            .map(|event| {
                let (breakdown, distance_km) = calculate_event_score(
                    event,
                    &user.location,
                    &signals,
                    &self.weights,
                    self.max_distance_km,
                );
                let score = breakdown.total();

                tracing::trace!("Event {} scored {:.4} ({:?})", event.id, score, breakdown);

                ScoredEvent {
                    event: event.clone(),
                    score,
                    distance_km,
                    breakdown,
                }
            })
            .collect();

        let total_candidates = scored.len();

        // sort_by is stable: equal scores keep catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        tracing::debug!(
            "Returning {} of {} candidate events",
            scored.len(),
            total_candidates
        );

        Ok(RecommendationResult {
            recommendations: scored,
            total_candidates,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Recommend events with the default weights
///
/// `limit` of `None` returns at most [`DEFAULT_LIMIT`] events.
pub fn get_recommended_events(
    user: &User,
    events: &[Event],
    similarity: &EventSimilarity,
    limit: Option<usize>,
) -> Result<Vec<Event>, RecommendError> {
    Recommender::default().recommend(user, events, similarity, limit)
}

/// Reject locations and popularity values that would turn every score into NaN
fn validate_inputs(user: &User, events: &[Event]) -> Result<(), RecommendError> {
    check_location("user", &user.location)?;

    for event in events {
        check_location(&format!("event {}", event.id), &event.location)?;

        if !event.popularity.is_finite() {
            tracing::warn!("Rejecting event {} with popularity {}", event.id, event.popularity);
            return Err(RecommendError::InvalidPopularity {
                event_id: event.id.clone(),
                popularity: event.popularity,
            });
        }
    }

    Ok(())
}

fn check_location(owner: &str, location: &Point) -> Result<(), RecommendError> {
    if location.is_finite() {
        return Ok(());
    }

    tracing::warn!("Rejecting {} with location {:?}", owner, location);
    Err(RecommendError::InvalidLocation {
        owner: owner.to_string(),
        lat: location.lat,
        lng: location.lng,
    })
}
