use crate::models::{Event, EventId, EventSimilarity, PopularityBounds, User};
use std::collections::{HashMap, HashSet};

/// Per-call inputs shared by every candidate's sub-scores
///
/// Built once before scoring and only read afterwards.
#[derive(Debug, Clone)]
pub struct UserSignals<'a> {
    pub attended: HashSet<&'a EventId>,
    /// Raw length of the attendance history, duplicates included
    pub attended_count: usize,
    pub similar_counts: HashMap<&'a EventId, usize>,
    pub preferences: HashSet<&'a str>,
    /// Raw length of the preference list, duplicates included
    pub preference_count: usize,
    pub popularity: PopularityBounds,
}

impl<'a> UserSignals<'a> {
    pub fn collect(
        user: &'a User,
        events: &[Event],
        similarity: &'a EventSimilarity,
    ) -> Self {
        Self {
            attended: attended_set(user),
            attended_count: user.attended_events.len(),
            similar_counts: collaborative_counts(user, similarity),
            preferences: preference_set(user),
            preference_count: user.preferences.len(),
            popularity: popularity_bounds(events),
        }
    }

    #[inline]
    pub fn has_attended(&self, event: &Event) -> bool {
        self.attended.contains(&event.id)
    }

    #[inline]
    pub fn similar_count(&self, id: &EventId) -> usize {
        self.similar_counts.get(id).copied().unwrap_or(0)
    }
}

/// Set of event ids the user has already attended
pub fn attended_set(user: &User) -> HashSet<&EventId> {
    user.attended_events.iter().collect()
}

/// Count, per event id, how many attended events list it as similar
///
/// Every attended entry triggers a lookup, so an id attended twice
/// contributes its similar events twice. Missing keys contribute nothing.
/// Ids inside the similar-event lists are counted as given.
pub fn collaborative_counts<'a>(
    user: &User,
    similarity: &'a EventSimilarity,
) -> HashMap<&'a EventId, usize> {
    let mut counts = HashMap::new();

    for attended_id in &user.attended_events {
        let Some(similar_ids) = similar_events(similarity, attended_id) else {
            continue;
        };
        for similar_id in similar_ids {
            *counts.entry(similar_id).or_insert(0) += 1;
        }
    }

    counts
}

/// Similar-event list for one id
///
/// Maps loaded from JSON objects are keyed by strings, so a numeric id that
/// misses is retried under its decimal string form.
pub fn similar_events<'a>(
    similarity: &'a EventSimilarity,
    id: &EventId,
) -> Option<&'a Vec<EventId>> {
    similarity.get(id).or_else(|| match id {
        EventId::Int(n) => similarity.get(&EventId::Str(n.to_string())),
        EventId::Str(_) => None,
    })
}

/// Deduplicated preference categories
pub fn preference_set(user: &User) -> HashSet<&str> {
    user.preferences.iter().map(String::as_str).collect()
}

/// Popularity bounds over every input event, attended ones included
///
/// The minimum is taken together with 0 and the maximum together with 1,
/// so an empty catalog yields `[0, 1]`.
pub fn popularity_bounds(events: &[Event]) -> PopularityBounds {
    events
        .iter()
        .fold(PopularityBounds::default(), |bounds, event| PopularityBounds {
            min: bounds.min.min(event.popularity),
            max: bounds.max.max(event.popularity),
        })
}
