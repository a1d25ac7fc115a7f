//! Resilience and logging configuration: Retry, Logging.

use serde::{Deserialize, Serialize};

// ==============================
// Retry Configuration
// ==============================

/// Retry configuration for rate-limited backend calls
///
/// Configures exponential backoff for HTTP 429 responses. Other failures
/// are left to the geocode cascade and the routing fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryAppConfig {
    /// Initial delay before first retry in milliseconds (default: 500ms)
    #[serde(default = "default_retry_initial_delay")]
    pub initial_delay_ms: u64,

    /// Maximum delay between retries in milliseconds (default: 10000ms = 10s)
    #[serde(default = "default_retry_max_delay")]
    pub max_delay_ms: u64,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_retry_multiplier")]
    pub multiplier: f64,

    /// Maximum number of retry attempts (default: 3, 0 disables retries)
    #[serde(default = "default_retry_max_retries")]
    pub max_retries: u32,
}

const fn default_retry_initial_delay() -> u64 {
    500
}

const fn default_retry_max_delay() -> u64 {
    10_000
}

const fn default_retry_multiplier() -> f64 {
    2.0
}

const fn default_retry_max_retries() -> u32 {
    3
}

impl Default for RetryAppConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_retry_initial_delay(),
            max_delay_ms: default_retry_max_delay(),
            multiplier: default_retry_multiplier(),
            max_retries: default_retry_max_retries(),
        }
    }
}

impl RetryAppConfig {
    /// Convert to `retry::RetryConfig` for use with retry operations
    #[must_use]
    pub const fn to_retry_config(&self) -> crate::retry::RetryConfig {
        crate::retry::RetryConfig::new(
            self.initial_delay_ms,
            self.max_delay_ms,
            self.multiplier,
            self.max_retries,
        )
    }
}

// ==============================
// Logging Configuration
// ==============================

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn,fleetemit_cli=info,application=info,infrastructure=info,integration_ors=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}
