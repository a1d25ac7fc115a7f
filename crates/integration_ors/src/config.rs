//! OpenRouteService client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the OpenRouteService clients
#[derive(Clone, Serialize, Deserialize)]
pub struct OrsConfig {
    /// Base URL of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `Authorization` header
    #[serde(default)]
    pub api_key: String,

    /// Timeout for geocoding requests in seconds
    #[serde(default = "default_geocode_timeout_secs")]
    pub geocode_timeout_secs: u64,

    /// Timeout for directions requests in seconds
    #[serde(default = "default_directions_timeout_secs")]
    pub directions_timeout_secs: u64,

    /// Minimum delay between two requests from one client (0 = no throttling)
    #[serde(default)]
    pub min_request_interval_ms: u64,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for OrsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field("directions_timeout_secs", &self.directions_timeout_secs)
            .field("min_request_interval_ms", &self.min_request_interval_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

const fn default_geocode_timeout_secs() -> u64 {
    30
}

const fn default_directions_timeout_secs() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("FleetEmit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            geocode_timeout_secs: default_geocode_timeout_secs(),
            directions_timeout_secs: default_directions_timeout_secs(),
            min_request_interval_ms: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl OrsConfig {
    /// Create a configuration pointing at a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: "test-key".to_string(),
            geocode_timeout_secs: 5,
            directions_timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.geocode_timeout_secs == 0 || self.directions_timeout_secs == 0 {
            return Err("timeouts must be greater than 0".to_string());
        }

        Ok(())
    }
}
