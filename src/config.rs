//! Configuration types for boxoffice-client

use crate::error::ConfigError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Remote API configuration (endpoint, credentials, timeouts)
///
/// Groups settings for the box-office service the repository talks to.
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the box-office REST service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key issued by the service (required, no default)
    #[serde(default)]
    pub api_key: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Target date for the daily ranking (None = yesterday)
    ///
    /// The service publishes each day's ranking the following morning, so
    /// "yesterday" is the latest date guaranteed to exist.
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            target_date: None,
        }
    }
}

/// Main configuration for boxoffice-client
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Whether the detail phase runs after a successful list fetch (default: true)
    #[serde(default = "default_true")]
    pub fetch_detail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            fetch_detail: default_true(),
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending key when the API key is
    /// empty, the base URL does not parse, or the timeout is zero.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.api.api_key.trim().is_empty() {
            return Err(ConfigError {
                message: "api key must not be empty".to_string(),
                key: Some("api.api_key"),
            });
        }

        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(ConfigError {
                message: format!("base url '{}' is invalid: {}", self.api.base_url, e),
                key: Some("api.base_url"),
            });
        }

        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError {
                message: "request timeout must be at least 1 second".to_string(),
                key: Some("api.request_timeout_secs"),
            });
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://www.kobis.or.kr/kobisopenapi/webservice/rest/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
