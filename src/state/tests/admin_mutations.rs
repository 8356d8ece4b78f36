//! Tests for admin mutations and their write-through refresh.

use super::{document, program, server_error, step, student};
use crate::{
    api::ApiError,
    model::review::ReviewDecision,
    state::admin::{AdminAction, AdminDashboard, AdminFetch, AdminFetched, AdminMutation},
};

/// Dashboard with institution 1, program p1 (one step) and student s1 (one document) selected.
fn selected() -> AdminDashboard {
    let (dashboard, fetches) = AdminDashboard::default().select_institution("1".to_string());
    let AdminFetch::Programs { ticket, .. } = fetches[0] else {
        panic!("expected programs fetch");
    };
    let (mut dashboard, mut pending) = dashboard.fetched(AdminFetched::Programs(
        ticket,
        Ok(vec![program("p1", "1", "UNIVERSITY")]),
    ));

    while let Some(fetch) = pending.pop() {
        let fetched = match fetch {
            AdminFetch::Students { ticket, .. } => {
                AdminFetched::Students(ticket, Ok(vec![student("s1", "p1")]))
            }
            AdminFetch::Checklist { ticket, .. } => {
                AdminFetched::Checklist(ticket, Ok(vec![step("c1", "p1", 1)]))
            }
            AdminFetch::Requests { ticket, .. } => AdminFetched::Requests(ticket, Ok(vec![])),
            AdminFetch::Documents { ticket, .. } => {
                AdminFetched::Documents(ticket, Ok(vec![document("d1", "PENDING")]))
            }
            other => panic!("unexpected fetch {:?}", other),
        };

        let (next, more) = dashboard.fetched(fetched);
        dashboard = next;
        pending.extend(more);
    }

    dashboard
}

/// Tests creating a checklist step.
///
/// Verifies that the step is appended after the existing steps as a required step, and that a
/// successful refresh replaces the checklist and clears the form.
///
/// Expected: sort_order 2, is_required, form cleared, refreshed list shown
#[test]
fn create_step_refreshes_checklist() {
    let mut dashboard = selected();
    dashboard.step_form.title = "Upload passport".to_string();
    dashboard.step_form.category = "  ".to_string();

    let (dashboard, mutation) = dashboard.create_step();
    let Some(AdminMutation::CreateStep { body, ticket }) = mutation else {
        panic!("expected create step mutation");
    };
    assert_eq!(body.sort_order, 2);
    assert!(body.is_required);
    assert_eq!(body.category, None);
    assert_eq!(dashboard.pending(), Some(&AdminAction::CreateStep));
    assert_eq!(dashboard.checklist.len(), 1);

    let (dashboard, _) = dashboard.committed(AdminFetched::Checklist(
        ticket,
        Ok(vec![step("c1", "p1", 1), step("c2", "p1", 2)]),
    ));

    assert_eq!(dashboard.checklist.len(), 2);
    assert!(dashboard.step_form.title.is_empty());
    assert!(!dashboard.is_busy());
}

/// Tests a failing mutation.
///
/// Verifies that a non-2xx mutation leaves the collection as it was, keeps the form input and
/// shows the backend's detail.
///
/// Expected: checklist unchanged, form kept, banner shows detail
#[test]
fn failed_mutation_leaves_state_unchanged() {
    let mut dashboard = selected();
    dashboard.step_form.title = "Upload passport".to_string();
    let before = dashboard.checklist.items().to_vec();

    let (dashboard, mutation) = dashboard.create_step();
    let Some(AdminMutation::CreateStep { ticket, .. }) = mutation else {
        panic!("expected create step mutation");
    };

    let (dashboard, fetches) = dashboard.committed(AdminFetched::Checklist(
        ticket,
        Err(server_error("create step", Some("Step title already exists"))),
    ));

    assert!(fetches.is_empty());
    assert_eq!(dashboard.checklist.items(), &before[..]);
    assert!(!dashboard.checklist.is_loading());
    assert_eq!(dashboard.step_form.title, "Upload passport");
    assert_eq!(dashboard.error.as_deref(), Some("Step title already exists"));
}

/// Tests a failing mutation without a detail.
///
/// Expected: generic status-coded message
#[test]
fn failed_mutation_without_detail_uses_generic_message() {
    let mut dashboard = selected();
    dashboard.template = "standard".to_string();

    let (dashboard, mutation) = dashboard.apply_template();
    let Some(AdminMutation::ApplyTemplate { ticket, .. }) = mutation else {
        panic!("expected apply template mutation");
    };

    let (dashboard, _) = dashboard.committed(AdminFetched::Checklist(
        ticket,
        Err(ApiError::Status {
            action: "apply template",
            status: 500,
            detail: None,
        }),
    ));

    assert_eq!(dashboard.error.as_deref(), Some("Failed to apply template (500)"));
    assert_eq!(dashboard.template, "standard");
}

/// Tests bulk add with no valid line.
///
/// Verifies that the bulk form is rejected locally and no mutation is produced.
///
/// Expected: None, validation message in banner
#[test]
fn empty_bulk_input_is_rejected_locally() {
    let mut dashboard = selected();
    dashboard.bulk_input = "bad-line\n\n".to_string();

    let (dashboard, mutation) = dashboard.add_students();

    assert!(mutation.is_none());
    assert!(!dashboard.is_busy());
    assert!(dashboard
        .error
        .as_deref()
        .is_some_and(|message| message.starts_with("No valid student lines found")));
}

/// Tests bulk add sending only the valid lines.
///
/// Expected: two students in the batch for program p1
#[test]
fn bulk_add_sends_valid_lines() {
    let mut dashboard = selected();
    dashboard.bulk_input =
        "Jane Doe, jane@x.com, MIT\nbad-line\nJohn, john@x.com, Yale".to_string();

    let (_, mutation) = dashboard.add_students();
    let Some(AdminMutation::AddStudents {
        program_id, body, ..
    }) = mutation
    else {
        panic!("expected add students mutation");
    };

    assert_eq!(program_id, "p1");
    assert_eq!(body.students.len(), 2);
}

/// Tests reviewing a document.
///
/// Verifies that the reviewer is recorded as "Admin", blank notes become null, and that only
/// one mutation may be in flight.
///
/// Expected: document review mutation for d1, second action ignored while pending
#[test]
fn review_document_blocks_concurrent_actions() {
    let dashboard = selected();

    let (dashboard, mutation) =
        dashboard.review_document("d1".to_string(), ReviewDecision::Approve, "   ");
    let Some(AdminMutation::ReviewDocument {
        student_id, body, ..
    }) = mutation
    else {
        panic!("expected review document mutation");
    };
    assert_eq!(student_id, "s1");
    assert_eq!(body.reviewer, "Admin");
    assert_eq!(body.reviewer_notes, None);

    let (_, second) = dashboard.review_document("d1".to_string(), ReviewDecision::Reject, "");
    assert!(second.is_none());
}

/// Tests creating a program with an invalid date.
///
/// Expected: None, validation message in banner
#[test]
fn create_program_validates_date() {
    let mut dashboard = selected();
    dashboard.program_form.name = "Exchange".to_string();
    dashboard.program_form.term_label = "Spring 2026".to_string();
    dashboard.program_form.term_start_date = "2026-13-01".to_string();

    let (dashboard, mutation) = dashboard.create_program();

    assert!(mutation.is_none());
    assert_eq!(
        dashboard.error.as_deref(),
        Some("Term start date must be a valid date (YYYY-MM-DD)")
    );
}
