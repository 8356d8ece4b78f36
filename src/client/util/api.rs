use arrival::api::{config::ApiConfig, ApiError, ArrivalApi, PlatformTransport};

pub type Api = ArrivalApi<PlatformTransport>;

/// Backend client provided as context by [`crate::client::App`], or why it is unavailable.
pub type BackendApi = Result<Api, ApiError>;

/// Client for the backend configured at build time.
pub fn backend_api() -> BackendApi {
    let config = ApiConfig::from_build_env()?;

    Ok(ArrivalApi::new(config.base_url, PlatformTransport::default()))
}

/// Client for the frontend server's own routes, on the page's origin.
pub fn frontend_api() -> Api {
    ArrivalApi::new("", PlatformTransport::default())
}
