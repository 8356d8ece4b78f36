//! Server configuration read from the environment.

use std::time::Duration;

use crate::server::error::config::ConfigError;

/// Backend health endpoint the proxy forwards to
pub const BACKEND_HEALTH_URL_VAR: &str = "BACKEND_HEALTH_URL";
/// Upstream request timeout in seconds
pub const BACKEND_TIMEOUT_SECS_VAR: &str = "BACKEND_TIMEOUT_SECS";
/// Timeout used when [`BACKEND_TIMEOUT_SECS_VAR`] is unset
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Full URL of the backend's health check, e.g. `https://api.example.com/api/health`
    pub backend_health_url: String,
    /// Timeout applied to upstream requests
    pub backend_timeout: Duration,
}

impl Config {
    /// Read the configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `BACKEND_HEALTH_URL` unset or blank
    /// - `Err(ConfigError::InvalidEnvValue)` - A value failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_health_url = lookup(BACKEND_HEALTH_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(BACKEND_HEALTH_URL_VAR.to_string()))?;

        let timeout_secs = match lookup(BACKEND_TIMEOUT_SECS_VAR) {
            Some(value) if !value.trim().is_empty() => {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: BACKEND_TIMEOUT_SECS_VAR.to_string(),
                        reason: e.to_string(),
                    })?
            }
            _ => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        Ok(Self {
            backend_health_url,
            backend_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
