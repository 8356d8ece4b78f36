//! Tests for the client's mutations.
//!
//! Mutations only report success or failure; these verify the request each one sends and how
//! failures are surfaced.

use arrival::model::{
    checklist::{CreateChecklistStepDto, ItemStatus, MarkStepDto},
    document::DocumentUpload,
    message::SenderType,
    review::ReviewDecision,
};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Tests creating a checklist step.
///
/// Verifies that the step is posted as JSON with its sort order, and that a 2xx with any body
/// is success.
///
/// Expected: Ok(())
#[tokio::test]
async fn create_step_posts_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/program-checklist")
                .match_body(Matcher::PartialJson(json!({
                    "program_id": "p1",
                    "title": "Upload passport",
                    "is_required": true,
                    "sort_order": 2
                })))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body(r#"{"id": "c2"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let step = CreateChecklistStepDto {
        program_id: "p1".to_string(),
        title: "Upload passport".to_string(),
        description: None,
        category: None,
        is_required: true,
        sort_order: 2,
    };

    let result = api(&test).create_checklist_step(&step).await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}

/// Tests a mutation rejected with a validation detail list.
///
/// Expected: Err(ApiError::Status) rendering the joined messages
#[tokio::test]
async fn rejected_mutation_joins_validation_messages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/api/student-checklist/mark",
            422,
            json!({"detail": [{"loc": ["body", "status"], "msg": "invalid status"}]}),
            1,
        )
        .build()
        .await?;

    let mark = MarkStepDto {
        student_id: "s1".to_string(),
        checklist_step_id: "c1".to_string(),
        status: ItemStatus::Done,
    };

    let err = api(&test).mark_step(&mark).await.unwrap_err();

    assert_eq!(err.to_string(), "invalid status");

    Ok(())
}

/// Tests a failed mutation without a readable body.
///
/// Verifies that an HTML error page on a mutation falls back to the generic message.
///
/// Expected: Err with "Failed to send message (500)"
#[tokio::test]
async fn failed_mutation_without_detail_uses_generic_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_html_endpoint("POST", "/api/conversations/conv1/messages", 500, 1)
        .build()
        .await?;

    let message = arrival::model::message::SendMessageDto {
        sender_type: SenderType::Student,
        sender_id: "s1".to_string(),
        content: "Hello".to_string(),
    };

    let err = api(&test).send_message("conv1", &message).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to send message (500)");

    Ok(())
}

/// Tests uploading a document.
///
/// Verifies that the upload is sent as multipart form data carrying the student, the step and
/// the file.
///
/// Expected: Ok(())
#[tokio::test]
async fn upload_sends_multipart_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/student-documents/upload")
                .match_header("content-type", Matcher::Regex("multipart/form-data".to_string()))
                .match_body(Matcher::AllOf(vec![
                    Matcher::Regex(r#"name="student_id""#.to_string()),
                    Matcher::Regex(r#"name="checklist_step_id""#.to_string()),
                    Matcher::Regex(r#"filename="passport.pdf""#.to_string()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let upload = DocumentUpload {
        student_id: "s1".to_string(),
        checklist_step_id: "c1".to_string(),
        file_name: "passport.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.4".to_vec(),
    };

    let result = api(&test).upload_document(upload).await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}

/// Tests approving a document.
///
/// Verifies the decision picks the endpoint and the reviewer travels in the body.
///
/// Expected: Ok(())
#[tokio::test]
async fn review_document_posts_to_decision_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/admin/documents/d1/approve")
                .match_body(Matcher::Json(json!({
                    "reviewer": "Admin",
                    "reviewer_notes": null
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let review = arrival::model::document::DocumentReviewDto {
        reviewer: "Admin".to_string(),
        reviewer_notes: None,
    };

    let result = api(&test)
        .review_document("d1", ReviewDecision::Approve, &review)
        .await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}

/// Tests marking a conversation read.
///
/// Expected: POST with `reader_type=ADMIN`
#[tokio::test]
async fn mark_read_sends_reader_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/conversations/conv1/mark-read")
                .match_query(Matcher::UrlEncoded(
                    "reader_type".to_string(),
                    "ADMIN".to_string(),
                ))
                .with_status(204)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = api(&test).mark_read("conv1", SenderType::Admin).await;

    assert_eq!(result, Ok(()));
    test.assert_mocks();

    Ok(())
}
