use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    model::api::ErrorDto,
    server::{error::health::HealthError, model::app::AppState},
};

/// OpenAPI tag of the health routes
pub static HEALTH_TAG: &str = "health";

/// Check the backend's health.
///
/// Forwards to the configured backend health endpoint, bypassing any cache, and relays its JSON
/// body when it answers with a 2xx status.
#[utoipa::path(
    get,
    path = "/api/backend-health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Backend health body, relayed as-is"),
        (status = 502, description = "Backend answered with a non-2xx status", body = ErrorDto),
        (status = 500, description = "Backend unreachable or returned invalid JSON", body = ErrorDto)
    ),
)]
pub async fn backend_health(State(state): State<AppState>) -> Response {
    match check_backend(&state).await {
        Ok(body) => ([(header::CACHE_CONTROL, "no-store")], Json(body)).into_response(),
        Err(err) => ([(header::CACHE_CONTROL, "no-store")], err).into_response(),
    }
}

async fn check_backend(state: &AppState) -> Result<Value, HealthError> {
    let response = state
        .http
        .get(&state.config.backend_health_url)
        .header(header::CACHE_CONTROL.as_str(), "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(HealthError::Upstream(status.as_u16()));
    }

    let body = response.json::<Value>().await?;
    tracing::debug!("Backend health: {}", body);

    Ok(body)
}
