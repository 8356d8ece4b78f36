use std::sync::Arc;

use crate::server::config::Config;

/// State shared by the server's handlers.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client used for upstream requests
    pub http: reqwest::Client,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// State for `config` using `http` for upstream requests.
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }
}
