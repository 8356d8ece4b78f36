use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure of the proxied backend health check.
#[derive(Error, Debug)]
pub enum HealthError {
    /// The backend answered with a non-2xx status.
    #[error("Upstream error: {0}")]
    Upstream(u16),
    /// The backend could not be reached, or its body was not JSON.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Converts health check failures into JSON error responses.
///
/// # Returns
/// - 502 Bad Gateway - The backend answered with a non-2xx status
/// - 500 Internal Server Error - The backend could not be reached or answered with invalid JSON
impl IntoResponse for HealthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!("Backend health check failed: {}", self);

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
