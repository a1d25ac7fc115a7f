//! Application configuration
//!
//! Split into focused sub-modules:
//! - `ors`: OpenRouteService connection and API key
//! - `pipeline`: Geocoding, routing, emission factors, batch concurrency
//! - `resilience`: Retry and logging

mod ors;
mod pipeline;
mod resilience;

use std::path::Path;

use application::error::ApplicationError;
use application::services::PipelineSettings;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use ors::{ORS_API_KEY_ENV, OrsAppConfig};
pub use pipeline::{
    EmissionsAppConfig, GeoLocationConfig, GeocodingAppConfig, PipelineAppConfig,
    RoutingAppConfig,
};
pub use resilience::{LoggingConfig, RetryAppConfig};

/// Default configuration file name (without extension)
pub const CONFIG_FILE_NAME: &str = "fleetemit";

/// Prefix for environment overrides (e.g. `FLEETEMIT_ORS__BASE_URL`)
pub const ENV_PREFIX: &str = "FLEETEMIT";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenRouteService configuration
    #[serde(default)]
    pub ors: OrsAppConfig,

    /// Geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Routing configuration
    #[serde(default)]
    pub routing: RoutingAppConfig,

    /// Emission factor configuration
    #[serde(default)]
    pub emissions: EmissionsAppConfig,

    /// Batch processing configuration
    #[serde(default)]
    pub pipeline: PipelineAppConfig,

    /// Retry configuration for rate-limited calls
    #[serde(default)]
    pub retry: RetryAppConfig,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `fleetemit.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = path.map_or_else(
            || config::File::with_name(CONFIG_FILE_NAME).required(false),
            |path| config::File::from(path).required(true),
        );

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., FLEETEMIT_ORS__BASE_URL)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("geocoding.known_cities"),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// API key for OpenRouteService
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither `ors.api_key` nor
    /// `ORS_API_KEY` provides a non-blank key.
    pub fn require_api_key(&self) -> Result<SecretString, ApplicationError> {
        self.ors.resolve_api_key().ok_or_else(|| {
            ApplicationError::Configuration(format!(
                "missing OpenRouteService API key: set {ENV_PREFIX}_ORS__API_KEY or {ORS_API_KEY_ENV}"
            ))
        })
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns a configuration error listing every invalid setting.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let mut problems = Vec::new();

        if self.ors.base_url.trim().is_empty() {
            problems.push("ors.base_url must not be empty".to_string());
        }
        if self.ors.geocode_timeout_secs == 0 || self.ors.directions_timeout_secs == 0 {
            problems.push("ors timeouts must be greater than zero".to_string());
        }
        if self.geocoding.candidate_batch_size == 0 {
            problems.push("geocoding.candidate_batch_size must be at least 1".to_string());
        }
        if let Some(focus) = &self.geocoding.focus_point
            && focus.to_coordinate().is_none()
        {
            problems.push(format!(
                "geocoding.focus_point is out of range: lat {} lon {}",
                focus.latitude, focus.longitude
            ));
        }
        if !(0.0..=1.0).contains(&self.routing.share_factor) {
            problems.push("routing.share_factor must be between 0 and 1".to_string());
        }
        if self.routing.weight_factor < 1.0 {
            problems.push("routing.weight_factor must be at least 1".to_string());
        }
        if self.pipeline.concurrency == 0 {
            problems.push("pipeline.concurrency must be at least 1".to_string());
        }
        if self.retry.multiplier < 1.0 {
            problems.push("retry.multiplier must be at least 1".to_string());
        }
        let invalid = self.emissions.overrides.invalid_keys();
        if !invalid.is_empty() {
            problems.push(format!(
                "emissions.overrides must be finite and non-negative: {}",
                invalid.join(", ")
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Configuration(problems.join("; ")))
        }
    }

    /// Settings for the trip pipeline
    #[must_use]
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            country_bias: non_blank(&self.geocoding.country_bias),
            city_hint: non_blank(&self.geocoding.city_hint),
            known_cities: self.geocoding.known_cities.clone(),
            focus_point: self
                .geocoding
                .focus_point
                .as_ref()
                .and_then(GeoLocationConfig::to_coordinate),
            profile: self.routing.profile,
            concurrency: self.pipeline.concurrency.max(1),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::value_objects::TravelProfile;
    use secrecy::ExposeSecret;

    use super::*;

    fn load_toml(contents: &str) -> AppConfig {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        AppConfig::load_from(Some(file.path())).unwrap()
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.geocoding.country_bias, "IN");
        assert_eq!(config.geocoding.candidate_batch_size, 5);
        assert_eq!(config.routing.target_count, 2);
        assert_eq!(config.pipeline.concurrency, 1);
        assert_eq!(config.retry.max_retries, 3);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = load_toml(
            r#"
            [ors]
            base_url = "http://localhost:8080/ors"
            min_request_interval_ms = 250

            [geocoding]
            country_bias = "DE"
            city_hint = "Berlin"
            known_cities = ["Berlin", "Hamburg"]
            focus_point = { latitude = 52.52, longitude = 13.405 }

            [routing]
            profile = "driving-hgv"
            target_count = 3

            [emissions.overrides]
            "Car|Petrol" = 0.2

            [pipeline]
            concurrency = 4
            "#,
        );

        assert_eq!(config.ors.base_url, "http://localhost:8080/ors");
        assert_eq!(config.ors.min_request_interval_ms, 250);
        assert_eq!(config.geocoding.known_cities, vec!["Berlin", "Hamburg"]);
        assert_eq!(config.routing.profile, TravelProfile::DrivingHgv);
        assert_eq!(config.emissions.overrides.len(), 1);
        assert!(config.validate().is_ok());

        let settings = config.pipeline_settings();
        assert_eq!(settings.country_bias.as_deref(), Some("DE"));
        assert_eq!(settings.city_hint.as_deref(), Some("Berlin"));
        assert_eq!(settings.concurrency, 4);
        let focus = settings.focus_point.unwrap();
        assert!((focus.latitude() - 52.52).abs() < 1e-9);
        assert!((focus.longitude() - 13.405).abs() < 1e-9);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/fleetemit.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn blank_country_disables_bias() {
        let mut config = AppConfig::default();
        config.geocoding.country_bias = "  ".to_string();
        assert_eq!(config.pipeline_settings().country_bias, None);
    }

    #[test]
    fn configured_api_key_is_used() {
        let mut config = AppConfig::default();
        config.ors.api_key = Some(SecretString::from("configured-key"));
        let key = config.require_api_key().unwrap();
        assert_eq!(key.expose_secret(), "configured-key");
    }

    #[test]
    fn api_key_is_redacted_in_debug() {
        let mut config = AppConfig::default();
        config.ors.api_key = Some(SecretString::from("super-secret"));
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn api_key_is_not_serialized() {
        let mut config = AppConfig::default();
        config.ors.api_key = Some(SecretString::from("super-secret"));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }

    #[test]
    fn validate_collects_problems() {
        let mut config = AppConfig::default();
        config.pipeline.concurrency = 0;
        config.routing.share_factor = 1.5;
        config.geocoding.focus_point = Some(GeoLocationConfig {
            latitude: 120.0,
            longitude: 0.0,
        });
        config.emissions.overrides =
            domain::EmissionFactorOverrides::new().with_factor("Car|Petrol", -0.1);

        let Err(ApplicationError::Configuration(message)) = config.validate() else {
            panic!("expected configuration error");
        };
        assert!(message.contains("pipeline.concurrency"));
        assert!(message.contains("routing.share_factor"));
        assert!(message.contains("geocoding.focus_point"));
        assert!(message.contains("Car|Petrol"));
    }

    #[test]
    fn ors_config_carries_key_and_timeouts() {
        let mut config = AppConfig::default();
        config.ors.geocode_timeout_secs = 7;
        let ors = config.ors.to_ors_config(&SecretString::from("k"));
        assert_eq!(ors.api_key, "k");
        assert_eq!(ors.geocode_timeout_secs, 7);
        assert_eq!(ors.directions_timeout_secs, 60);
    }

    #[test]
    fn retry_config_conversion() {
        let retry = RetryAppConfig::default().to_retry_config();
        assert_eq!(retry.initial_delay_ms, 500);
        assert_eq!(retry.max_retries, 3);
    }
}
