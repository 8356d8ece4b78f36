use crate::server::{config::Config, error::Error};

/// Build the HTTP client used for upstream requests, applying the configured timeout.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .timeout(config.backend_timeout)
        .user_agent(concat!("arrival/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
