//! Tests for the backend health proxy.
//!
//! This module verifies that the proxy relays the backend's JSON body on success, maps a
//! non-2xx upstream status to 502, and reports unreachable or non-JSON upstreams as 500. Every
//! response must disable caching.

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header, Request, StatusCode},
    response::Response,
};
use arrival::server::{controller::health::backend_health, router::routes};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests a healthy backend.
///
/// Expected: 200 with the upstream body and `Cache-Control: no-store`
#[tokio::test]
async fn relays_backend_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_health_endpoint(200, json!({"status": "ok", "db": "up"}), 1)
        .build()
        .await?;

    let response = backend_health(State(app_state(&test))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    assert_eq!(json_body(response).await, json!({"status": "ok", "db": "up"}));
    test.assert_mocks();

    Ok(())
}

/// Tests a backend answering with an error status.
///
/// Expected: 502 with `{"status": "error", "message": "Upstream error: 503"}`
#[tokio::test]
async fn upstream_error_status_is_bad_gateway() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_health_endpoint(503, json!({"status": "down"}), 1)
        .build()
        .await?;

    let response = backend_health(State(app_state(&test))).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        json_body(response).await,
        json!({"status": "error", "message": "Upstream error: 503"})
    );

    Ok(())
}

/// Tests a backend answering 200 with a non-JSON body.
///
/// Expected: 500 with an error body
#[tokio::test]
async fn invalid_upstream_json_is_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/health")
                .with_status(200)
                .with_header("content-type", "text/plain")
                .with_body("OK")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let response = backend_health(State(app_state(&test))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["status"], "error");

    Ok(())
}

/// Tests a backend that cannot be reached.
///
/// Expected: 500 with an error body and `Cache-Control: no-store`
#[tokio::test]
async fn unreachable_upstream_is_internal_error() {
    let config = Config {
        backend_health_url: "http://127.0.0.1:9/api/health".to_string(),
        backend_timeout: Duration::from_secs(5),
    };
    let state = AppState::new(config, reqwest::Client::new());

    let response = backend_health(State(state)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

/// Tests the route registration.
///
/// Verifies the proxy is served at `/api/backend-health` and documented in the OpenAPI document.
///
/// Expected: 200 from the route, path listed in `/api/docs/openapi.json`
#[tokio::test]
async fn routes_serve_proxy_and_docs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_health_endpoint(200, json!({"status": "ok"}), 1)
        .build()
        .await?;
    let router = routes().with_state(app_state(&test));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/backend-health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let docs = router
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let openapi = json_body(docs).await;
    assert!(openapi["paths"].get("/api/backend-health").is_some());
    test.assert_mocks();

    Ok(())
}
