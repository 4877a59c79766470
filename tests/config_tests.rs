// Configuration loading tests
//
// Kept in their own test binary: they set process-wide EVENT_RECS__* variables.

use event_recs::{Recommender, Settings};

#[test]
fn test_environment_overrides_default_file() {
    std::env::set_var("EVENT_RECS__RECOMMENDATION__DEFAULT_LIMIT", "7");
    std::env::set_var("EVENT_RECS__SCORING__WEIGHTS__GEO", "0.35");

    let settings = Settings::load();

    std::env::remove_var("EVENT_RECS__RECOMMENDATION__DEFAULT_LIMIT");
    std::env::remove_var("EVENT_RECS__SCORING__WEIGHTS__GEO");

    let settings = settings.unwrap();
    assert_eq!(settings.recommendation.default_limit, 7);
    assert_eq!(settings.scoring.weights.geo, 0.35);
    // untouched values still come from config/default.toml
    assert_eq!(settings.recommendation.max_distance_km, 100.0);
    assert_eq!(settings.scoring.weights.preference, 0.4);

    let recommender = Recommender::from_settings(&settings).unwrap();
    assert_eq!(recommender.default_limit(), 7);
}
