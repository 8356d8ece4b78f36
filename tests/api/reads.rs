//! Tests for the client's collection and object reads.
//!
//! These verify envelope normalization, the content-type check that runs ahead of the status
//! check, error detail extraction, and that query parameters reach the backend.

use arrival::model::{message::SenderType, request::RecipientType, review::ReviewStatus};
use serde_json::json;

use super::*;

/// Tests reading a bare array.
///
/// Expected: Ok with both institutions decoded in order
#[tokio::test]
async fn lists_institutions_from_bare_array() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get(
            "/api/institutions",
            json!([
                factory::institution("1", "Acme U"),
                factory::institution("2", "Beta College")
            ]),
            1,
        )
        .build()
        .await?;

    let institutions = api(&test).list_institutions().await;

    let institutions = institutions.unwrap();
    assert_eq!(institutions.len(), 2);
    assert_eq!(institutions[1].name, "Beta College");
    test.assert_mocks();

    Ok(())
}

/// Tests reading an enveloped collection filtered by query.
///
/// Verifies that the institution id is sent as a query parameter and that programs wrapped in
/// a `{"status": "ok", "programs": [...]}` object are unwrapped.
///
/// Expected: Ok with one program
#[tokio::test]
async fn lists_programs_from_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(
            "/api/programs",
            &[("institution_id", "1")],
            factory::envelope("programs", vec![factory::program("p1", "1", "NGO")]),
            1,
        )
        .build()
        .await?;

    let programs = api(&test).list_programs("1").await.unwrap();

    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0].program_type.recipient(), RecipientType::Ngo);
    test.assert_mocks();

    Ok(())
}

/// Tests an HTML response to a read.
///
/// Verifies that a non-JSON body is reported as such, even though the status is also an
/// error.
///
/// Expected: Err(ApiError::NotJson)
#[tokio::test]
async fn html_response_is_not_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_html_endpoint("GET", "/api/students", 404, 1)
        .build()
        .await?;

    let result = api(&test).list_students("p1").await;

    assert_eq!(
        result,
        Err(ApiError::NotJson {
            resource: "students"
        })
    );
    test.assert_mocks();

    Ok(())
}

/// Tests a failed read carrying a detail.
///
/// Expected: Err(ApiError::Status) rendering the backend's detail
#[tokio::test]
async fn failed_read_surfaces_detail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/api/program-checklist",
            404,
            factory::error_detail("Program not found"),
            1,
        )
        .build()
        .await?;

    let err = api(&test).list_checklist_steps("missing").await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Program not found");

    Ok(())
}

/// Tests a JSON body of the wrong shape.
///
/// Expected: Err(ApiError::UnexpectedShape)
#[tokio::test]
async fn object_without_collection_key_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get("/api/admin/requests", json!({"status": "ok", "count": 0}), 1)
        .build()
        .await?;

    let result = api(&test).list_requests(RecipientType::University).await;

    assert_eq!(
        result,
        Err(ApiError::UnexpectedShape {
            resource: "requests"
        })
    );

    Ok(())
}

/// Tests the student checklist with document state.
///
/// Expected: Ok with the review status decoded
#[tokio::test]
async fn student_checklist_decodes_review_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(
            "/api/student-checklist",
            &[("student_id", "s1")],
            json!([
                factory::checklist_item("c1", "PENDING", true, true, Some("REJECTED")),
                factory::checklist_item("c2", "DONE", false, false, None)
            ]),
            1,
        )
        .build()
        .await?;

    let items = api(&test).student_checklist("s1").await.unwrap();

    assert_eq!(items[0].review_status, Some(ReviewStatus::Rejected));
    assert!(items[1].is_done());

    Ok(())
}

/// Tests loading a conversation and its first page of messages.
///
/// Verifies that messages are requested with `limit=50&offset=0`.
///
/// Expected: Ok with the conversation and one admin message
#[tokio::test]
async fn loads_conversation_and_messages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get(
            "/api/students/s1/conversation",
            factory::conversation("conv1", "s1"),
            1,
        )
        .with_query_endpoint(
            "/api/conversations/conv1/messages",
            &[("limit", "50"), ("offset", "0")],
            factory::envelope(
                "messages",
                vec![factory::message("m1", "conv1", "ADMIN", "Welcome!")],
            ),
            1,
        )
        .build()
        .await?;

    let client = api(&test);
    let conversation = client.conversation("s1").await.unwrap();
    let messages = client.list_messages(&conversation.id).await.unwrap();

    assert_eq!(conversation.unread_count, 1);
    assert_eq!(messages[0].sender_type, SenderType::Admin);
    assert_eq!(messages[0].content, "Welcome!");
    test.assert_mocks();

    Ok(())
}

/// Tests a backend that cannot be reached.
///
/// Expected: Err(ApiError::Transport) naming the action
#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let client = arrival::api::ArrivalApi::new(
        "http://127.0.0.1:9",
        arrival::api::native::NativeTransport::default(),
    );

    let err = client.list_institutions().await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Transport {
            action: "load institutions",
            ..
        }
    ));
}
