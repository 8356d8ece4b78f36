use crate::api::error::ApiError;

/// Where the browser reaches the Arrival backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the base URL baked in at build time from `ARRIVAL_API_BASE_URL`.
    pub fn from_build_env() -> Result<Self, ApiError> {
        Self::from_value(option_env!("ARRIVAL_API_BASE_URL"))
    }

    /// # Returns
    /// - `Ok(ApiConfig)` - The trimmed base URL without a trailing slash
    /// - `Err(ApiError::NotConfigured)` - The value is absent or blank
    pub fn from_value(value: Option<&str>) -> Result<Self, ApiError> {
        let base_url = value
            .map(|value| value.trim().trim_end_matches('/'))
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::NotConfigured)?;

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }
}
