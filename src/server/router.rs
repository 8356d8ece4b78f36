//! HTTP routing and OpenAPI documentation.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Build the server's own routes, with Swagger UI served at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET /api/backend-health` - Proxy of the backend health check
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Arrival", description = "Arrival frontend server API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Backend health routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::backend_health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
