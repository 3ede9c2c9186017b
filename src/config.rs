//! Client configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use std::env;
use std::time::Duration;

/// Production backend used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://edutrack-backend-p3f4.onrender.com";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (no trailing slash)
    pub api_base_url: String,
    /// Optional per-request timeout. Unset means requests never time out.
    pub request_timeout: Option<Duration>,
    /// Demo login email for the binary
    pub demo_email: Option<String>,
    /// Demo login password for the binary
    pub demo_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            demo_email: None,
            demo_password: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("EDUTRACK_API_BASE_URL")
            .map(|v| normalize_base_url(&v))
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "EDUTRACK_API_BASE_URL",
                value: api_base_url,
            });
        }

        let request_timeout = match env::var("EDUTRACK_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "EDUTRACK_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
            demo_email: env::var("EDUTRACK_EMAIL").ok().filter(|v| !v.is_empty()),
            demo_password: env::var("EDUTRACK_PASSWORD").ok().filter(|v| !v.is_empty()),
        })
    }

    /// Config pointing at a local mock backend.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:0".to_string(),
            ..Self::default()
        }
    }

    /// Demo login credentials, required by the binary.
    pub fn demo_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let email = self
            .demo_email
            .as_deref()
            .ok_or(ConfigError::Missing("EDUTRACK_EMAIL"))?;
        let password = self
            .demo_password
            .as_deref()
            .ok_or(ConfigError::Missing("EDUTRACK_PASSWORD"))?;
        Ok((email, password))
    }

    /// Same config with a different base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(base_url);
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
