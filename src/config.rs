use crate::core::scoring::DEFAULT_MAX_DISTANCE_KM;
use crate::error::RecommendError;
use crate::models::ScoringWeights;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Number of recommendations returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 5;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    #[validate(nested)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecommendationSettings {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub default_limit: usize,
    #[serde(default = "default_max_distance_km")]
    #[validate(range(exclusive_min = 0.0))]
    pub max_distance_km: f64,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_distance_km: default_max_distance_km(),
        }
    }
}

fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_max_distance_km() -> f64 { DEFAULT_MAX_DISTANCE_KM }

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ScoringSettings {
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[serde(default = "default_content_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub content: f64,
    #[serde(default = "default_preference_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub preference: f64,
    #[serde(default = "default_geo_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub geo: f64,
    #[serde(default = "default_popularity_weight")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub popularity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            content: default_content_weight(),
            preference: default_preference_weight(),
            geo: default_geo_weight(),
            popularity: default_popularity_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            content: config.content,
            preference: config.preference,
            geo: config.geo,
            popularity: config.popularity,
        }
    }
}

fn default_content_weight() -> f64 { 0.3 }
fn default_preference_weight() -> f64 { 0.4 }
fn default_geo_weight() -> f64 { 0.2 }
fn default_popularity_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EVENT_RECS__)
    pub fn load() -> Result<Self, RecommendError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EVENT_RECS__RECOMMENDATION__DEFAULT_LIMIT -> recommendation.default_limit
            .add_source(environment())
            .build()?;

        finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, RecommendError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        finish(settings)
    }

    /// Check weights, limit and distance cap
    pub fn check(&self) -> Result<(), RecommendError> {
        self.validate()
            .map_err(|errors| RecommendError::InvalidSettings(errors.to_string()))
    }
}

fn environment() -> Environment {
    Environment::with_prefix("EVENT_RECS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn finish(config: Config) -> Result<Settings, RecommendError> {
    let settings: Settings = config.try_deserialize()?;
    settings.check()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.content, 0.3);
        assert_eq!(weights.preference, 0.4);
        assert_eq!(weights.geo, 0.2);
        assert_eq!(weights.popularity, 0.1);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.recommendation.default_limit, DEFAULT_LIMIT);
        assert_eq!(settings.recommendation.max_distance_km, 100.0);
        assert!(settings.check().is_ok());
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut settings = Settings::default();
        settings.scoring.weights.geo = 1.5;

        let err = settings.check().unwrap_err();
        assert!(matches!(err, RecommendError::InvalidSettings(_)));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut settings = Settings::default();
        settings.recommendation.default_limit = 0;
        assert!(settings.check().is_err());
    }

    #[test]
    fn test_load_from_file_with_partial_overrides() {
        let path = std::env::temp_dir().join(format!("event_recs_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[recommendation]\ndefault_limit = 10\n\n[scoring.weights]\ngeo = 0.5").unwrap();
        drop(file);

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.recommendation.default_limit, 10);
        assert_eq!(settings.recommendation.max_distance_km, 100.0);
        assert_eq!(settings.scoring.weights.geo, 0.5);
        assert_eq!(settings.scoring.weights.content, 0.3);
    }
}
