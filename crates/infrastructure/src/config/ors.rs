//! OpenRouteService connection settings

use integration_ors::OrsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when no key is configured
pub const ORS_API_KEY_ENV: &str = "ORS_API_KEY";

/// OpenRouteService configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OrsAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Geocoding request timeout in seconds (default: 30)
    #[serde(default = "default_geocode_timeout")]
    pub geocode_timeout_secs: u64,

    /// Directions request timeout in seconds (default: 60)
    #[serde(default = "default_directions_timeout")]
    pub directions_timeout_secs: u64,

    /// Minimum spacing between requests in milliseconds (0 = off)
    #[serde(default)]
    pub min_request_interval_ms: u64,
}

impl std::fmt::Debug for OrsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field("directions_timeout_secs", &self.directions_timeout_secs)
            .field("min_request_interval_ms", &self.min_request_interval_ms)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

const fn default_geocode_timeout() -> u64 {
    30
}

const fn default_directions_timeout() -> u64 {
    60
}

impl Default for OrsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            geocode_timeout_secs: default_geocode_timeout(),
            directions_timeout_secs: default_directions_timeout(),
            min_request_interval_ms: 0,
        }
    }
}

impl OrsAppConfig {
    /// The configured key, falling back to `ORS_API_KEY`
    ///
    /// Blank values count as missing.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
            .or_else(|| {
                std::env::var(ORS_API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .map(SecretString::from)
            })
    }

    /// Convert to `integration_ors`'s `OrsConfig`
    #[must_use]
    pub fn to_ors_config(&self, api_key: &SecretString) -> OrsConfig {
        OrsConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.expose_secret().to_string(),
            geocode_timeout_secs: self.geocode_timeout_secs,
            directions_timeout_secs: self.directions_timeout_secs,
            min_request_interval_ms: self.min_request_interval_ms,
            ..OrsConfig::default()
        }
    }
}
