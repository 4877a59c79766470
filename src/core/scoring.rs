use crate::core::{distance::calculate_distance, signals::UserSignals};
use crate::models::{Event, PopularityBounds, Point, ScoreBreakdown, ScoringWeights};

/// Default distance (km) at and beyond which the geo score is zero
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Calculate the weighted score breakdown for one candidate event
///
/// Scoring formula:
/// score = (
///     content_score * 0.3 +       # share of attended events listing it as similar
///     preference_score * 0.4 +    # category overlap, log-boosted
///     geo_score * 0.2 +           # linear falloff up to the distance cap
///     popularity_score * 0.1      # min-max normalised popularity
/// )
///
/// Returns the breakdown together with the user-to-event distance in km.
pub fn calculate_event_score(
    event: &Event,
    origin: &Point,
    signals: &UserSignals<'_>,
    weights: &ScoringWeights,
    max_distance_km: f64,
) -> (ScoreBreakdown, f64) {
    let distance_km = calculate_distance(origin, &event.location);

    let breakdown = ScoreBreakdown {
        content: calculate_content_score(
            signals.similar_count(&event.id),
            signals.attended_count,
        ) * weights.content,
        preference: calculate_preference_score(event, signals) * weights.preference,
        geo: calculate_geo_score(distance_km, max_distance_km) * weights.geo,
        popularity: calculate_popularity_score(event.popularity, &signals.popularity)
            * weights.popularity,
    };

    (breakdown, distance_km)
}

/// Fraction of attended events that list this event as similar
///
/// Can exceed 1 when the same similar id is reachable from repeated attendance.
#[inline]
pub fn calculate_content_score(similar_count: usize, attended_count: usize) -> f64 {
    if attended_count == 0 {
        return 0.0;
    }
    similar_count as f64 / attended_count as f64
}

/// Category overlap score, unweighted
///
/// `(matches / preference_count) * ln(1 + matches)`. The log factor rewards
/// events that overlap on many categories and is not clamped to 1.
#[inline]
pub fn calculate_preference_score(event: &Event, signals: &UserSignals<'_>) -> f64 {
    if signals.preference_count == 0 {
        return 0.0;
    }

    let matches = event
        .categories
        .iter()
        .filter(|category| signals.preferences.contains(category.as_str()))
        .count() as f64;

    (matches / signals.preference_count as f64) * (1.0 + matches).ln()
}

/// Geographic proximity score (0-1)
/// 1 at zero distance, falling linearly to 0 at `max_distance_km`
#[inline]
pub fn calculate_geo_score(distance_km: f64, max_distance_km: f64) -> f64 {
    (max_distance_km - distance_km.min(max_distance_km)) / max_distance_km
}

/// Min-max normalised popularity (0-1), or 0 when the bounds collapse
#[inline]
pub fn calculate_popularity_score(popularity: f64, bounds: &PopularityBounds) -> f64 {
    if bounds.max <= bounds.min {
        return 0.0;
    }
    (popularity - bounds.min) / (bounds.max - bounds.min)
}
