use arrival::state::student::StudentChecklist;
use serde_json::json;

use super::*;

/// Tests marking a step done.
///
/// Verifies that after the mark the checklist is re-read and the saving flag is cleared.
///
/// Expected: item done after refresh, progress 1 of 2
#[tokio::test]
async fn mark_done_refetches_checklist() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get(
            "/api/student-checklist",
            json!([
                factory::checklist_item("c1", "PENDING", false, false, None),
                factory::checklist_item("c2", "PENDING", true, false, None)
            ]),
            1,
        )
        .with_get("/api/student/s1/requests", json!([]), 1)
        .with_post("/api/student-checklist/mark", json!({"ok": true}), 1)
        .with_get(
            "/api/student-checklist",
            json!([
                factory::checklist_item("c1", "DONE", false, false, None),
                factory::checklist_item("c2", "PENDING", true, false, None)
            ]),
            1,
        )
        .build()
        .await?;
    let client = api(&test);

    let (mut page, fetches) = StudentChecklist::new("s1").load();
    for fetch in fetches {
        page = page.fetched(fetch.run(&client).await);
    }

    let (page, mutation) = page.mark_done("c1");
    assert!(page.is_saving("c1"));

    let (page, fetches) = page.committed(mutation.unwrap().commit(&client).await);

    assert!(fetches.is_empty());
    assert!(!page.is_saving("c1"));
    assert!(page.item("c1").unwrap().is_done());
    assert_eq!(page.progress(), (1, 2));
    assert!(page.error.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests the document gate blocking completion.
///
/// Verifies that a step requiring a document that has none is never sent to the backend.
///
/// Expected: no mutation, banner explains the gate
#[tokio::test]
async fn document_gate_blocks_mark_done() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_get(
            "/api/student-checklist",
            json!([factory::checklist_item("c2", "PENDING", true, true, Some("PENDING"))]),
            1,
        )
        .with_get("/api/student/s1/requests", json!([]), 1)
        .with_post("/api/student-checklist/mark", json!({}), 0)
        .build()
        .await?;
    let client = api(&test);

    let (mut page, fetches) = StudentChecklist::new("s1").load();
    for fetch in fetches {
        page = page.fetched(fetch.run(&client).await);
    }

    let (page, mutation) = page.mark_done("c2");

    assert!(mutation.is_none());
    assert!(page.error.is_some());
    assert!(!page.is_saving("c2"));
    test.assert_mocks();

    Ok(())
}

/// Tests submitting a request.
///
/// Expected: request list re-read, form cleared
#[tokio::test]
async fn submit_request_refetches_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_post("/api/student/s1/request", json!({"id": "r1"}), 1)
        .with_get(
            "/api/student/s1/requests",
            json!({"requests": [factory::request("r1", "s1", "PENDING", "UNIVERSITY")]}),
            1,
        )
        .build()
        .await?;
    let client = api(&test);

    let mut page = StudentChecklist::new("s1");
    page.request_form.request_type = "Housing".to_string();
    page.request_form.description = "Need a room closer to campus".to_string();

    let (page, mutation) = page.submit_request();
    assert!(page.is_submitting_request());

    let (page, fetches) = page.committed(mutation.unwrap().commit(&client).await);

    assert!(fetches.is_empty());
    assert!(!page.is_submitting_request());
    assert_eq!(page.requests.len(), 1);
    assert!(page.request_form.request_type.is_empty());
    test.assert_mocks();

    Ok(())
}
