use arrival::{
    api::{native::NativeTransport, ArrivalApi},
    model::request::RecipientType,
    state::admin::{AdminDashboard, AdminFetch},
};
use mockito::Matcher;
use serde_json::json;

use super::*;

/// Run `fetches` and every follow-up they trigger, one at a time.
async fn settle(
    api: &ArrivalApi<NativeTransport>,
    mut dashboard: AdminDashboard,
    mut fetches: Vec<AdminFetch>,
) -> AdminDashboard {
    while let Some(fetch) = fetches.pop() {
        let fetched = fetch.run(api).await;
        let (next, more) = dashboard.fetched(fetched);
        dashboard = next;
        fetches.extend(more);
    }

    dashboard
}

/// Mock backend with one institution, one NGO program, one student and their documents.
fn backend() -> TestBuilder {
    TestBuilder::new()
        .with_get(
            "/api/institutions",
            json!([factory::institution("1", "Acme U")]),
            1,
        )
        .with_query_endpoint(
            "/api/programs",
            &[("institution_id", "1")],
            json!([factory::program("p1", "1", "NGO")]),
            1,
        )
        .with_query_endpoint(
            "/api/students",
            &[("program_id", "p1")],
            json!({"students": [factory::student("s1", "p1")]}),
            1,
        )
        .with_query_endpoint(
            "/api/admin/requests",
            &[("recipient_type", "NGO")],
            json!([factory::request("r1", "s1", "PENDING", "NGO")]),
            1,
        )
        .with_get(
            "/api/admin/documents/student/s1",
            json!([factory::document("d1", "PENDING")]),
            1,
        )
}

/// Tests the dashboard's initial load against the backend.
///
/// Verifies that loading institutions cascades through programs, students, checklist,
/// documents and the NGO request queue, selecting the first entry at each level.
///
/// Expected: every collection loaded, each read made exactly once
#[tokio::test]
async fn initial_load_cascades_to_first_student() -> Result<(), TestError> {
    let test = backend()
        .with_query_endpoint(
            "/api/program-checklist",
            &[("program_id", "p1")],
            json!({"steps": [factory::checklist_step("c1", "p1", 1)]}),
            1,
        )
        .build()
        .await?;
    let client = api(&test);

    let (dashboard, fetches) = AdminDashboard::default().load();
    let dashboard = settle(&client, dashboard, fetches).await;

    assert_eq!(dashboard.selected_institution(), Some("1"));
    assert_eq!(dashboard.selected_program(), Some("p1"));
    assert_eq!(dashboard.selected_student(), Some("s1"));
    assert_eq!(dashboard.checklist.len(), 1);
    assert_eq!(dashboard.documents.len(), 1);
    assert_eq!(dashboard.requests.recipient, RecipientType::Ngo);
    assert_eq!(dashboard.requests.pending_count(), 1);
    assert!(dashboard.error.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests creating a step and re-reading the checklist.
///
/// Verifies that the refreshed checklist, not a locally appended step, ends up displayed.
///
/// Expected: two steps after the refresh, form cleared
#[tokio::test]
async fn create_step_refetches_checklist() -> Result<(), TestError> {
    let test = backend()
        .with_query_endpoint(
            "/api/program-checklist",
            &[("program_id", "p1")],
            json!([factory::checklist_step("c1", "p1", 1)]),
            1,
        )
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/program-checklist")
                .match_body(Matcher::PartialJson(json!({
                    "title": "Register at city hall",
                    "sort_order": 2
                })))
                .with_status(201)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .expect(1)
                .create()
        })
        .with_query_endpoint(
            "/api/program-checklist",
            &[("program_id", "p1")],
            json!([
                factory::checklist_step("c1", "p1", 1),
                factory::checklist_step("c2", "p1", 2)
            ]),
            1,
        )
        .build()
        .await?;
    let client = api(&test);

    let (dashboard, fetches) = AdminDashboard::default().load();
    let mut dashboard = settle(&client, dashboard, fetches).await;
    dashboard.step_form.title = "Register at city hall".to_string();

    let (dashboard, mutation) = dashboard.create_step();
    let committed = mutation.unwrap().commit(&client).await;
    let (dashboard, fetches) = dashboard.committed(committed);
    let dashboard = settle(&client, dashboard, fetches).await;

    assert_eq!(dashboard.checklist.len(), 2);
    assert!(dashboard.step_form.title.is_empty());
    assert!(!dashboard.is_busy());
    test.assert_mocks();

    Ok(())
}

/// Tests a rejected bulk add.
///
/// Verifies that the student list is not re-read and the backend's detail is shown.
///
/// Expected: banner with the detail, students unchanged
#[tokio::test]
async fn rejected_bulk_add_keeps_students() -> Result<(), TestError> {
    let test = backend()
        .with_query_endpoint(
            "/api/program-checklist",
            &[("program_id", "p1")],
            json!([]),
            1,
        )
        .with_json_endpoint(
            "POST",
            "/api/students/programs/p1/bulk",
            409,
            factory::error_detail("jane@x.com is already enrolled"),
            1,
        )
        .build()
        .await?;
    let client = api(&test);

    let (dashboard, fetches) = AdminDashboard::default().load();
    let mut dashboard = settle(&client, dashboard, fetches).await;
    dashboard.bulk_input = "Jane Doe, jane@x.com, MIT".to_string();

    let (dashboard, mutation) = dashboard.add_students();
    let committed = mutation.unwrap().commit(&client).await;
    let (dashboard, fetches) = dashboard.committed(committed);

    assert!(fetches.is_empty());
    assert_eq!(dashboard.students.len(), 1);
    assert_eq!(dashboard.bulk_input, "Jane Doe, jane@x.com, MIT");
    assert_eq!(
        dashboard.error.as_deref(),
        Some("jane@x.com is already enrolled")
    );
    test.assert_mocks();

    Ok(())
}
