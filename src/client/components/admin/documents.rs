use dioxus::prelude::*;

use arrival::{
    model::{document::StudentDocumentDto, review::ReviewDecision},
    state::admin::{AdminAction, AdminDashboard, Section},
};

use super::act;
use crate::client::{
    components::{SectionPrompt, StatusBadge},
    util::BackendApi,
};

/// Documents uploaded by the selected student, with approve and reject actions.
#[component]
pub fn DocumentsSection(dashboard: Signal<AdminDashboard>) -> Element {
    let state = dashboard.read();

    if let Some(prompt) = state.prompt(Section::Documents) {
        return rsx!(SectionPrompt { text: prompt });
    }

    let student_name = state
        .selected_student_dto()
        .map(|student| student.full_name.clone())
        .unwrap_or_default();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "Documents of {student_name}" }
                if state.documents.is_loading() && state.documents.is_empty() {
                    div { class: "skeleton h-16 w-full" }
                } else if state.documents.is_empty() {
                    p { class: "text-sm opacity-70", "No documents uploaded yet." }
                } else {
                    ul { class: "flex flex-col gap-2",
                        for document in state.documents.items() {
                            DocumentRow {
                                key: "{document.id}",
                                dashboard,
                                document: document.clone(),
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn DocumentRow(dashboard: Signal<AdminDashboard>, document: StudentDocumentDto) -> Element {
    let backend = use_context::<BackendApi>();
    let mut notes = use_signal(String::new);

    let state = dashboard.read();
    let status = document.status();
    let in_progress = match state.pending() {
        Some(AdminAction::ReviewDocument {
            document_id,
            decision,
        }) if *document_id == document.id => Some(*decision),
        _ => None,
    };
    let uploaded_at = document
        .uploaded_at
        .map(|at| at.format("%b %d, %Y").to_string());

    rsx!(
        li { class: "border border-base-300 rounded-box p-3 flex flex-col gap-2",
            div { class: "flex justify-between items-center gap-2",
                a {
                    class: "link link-primary",
                    href: "{document.public_url}",
                    target: "_blank",
                    "{document.file_name}"
                }
                StatusBadge { status }
            }
            if let Some(title) = &document.step_title {
                p { class: "text-xs opacity-70",
                    "{title}"
                    if let Some(category) = &document.step_category {
                        " · {category}"
                    }
                }
            }
            if let Some(uploaded_at) = uploaded_at {
                p { class: "text-xs opacity-70", "Uploaded {uploaded_at}" }
            }
            if let Some(reviewer_notes) = &document.reviewer_notes {
                p { class: "text-xs italic", "Reviewer notes: {reviewer_notes}" }
            }
            div { class: "flex gap-2 items-center",
                input {
                    class: "input input-bordered input-sm w-full",
                    placeholder: "Notes for the student (optional)",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
                }
                for decision in [ReviewDecision::Approve, ReviewDecision::Reject] {
                    button {
                        class: match decision {
                            ReviewDecision::Approve => "btn btn-success btn-sm",
                            ReviewDecision::Reject => "btn btn-error btn-sm",
                        },
                        disabled: state.is_busy(),
                        onclick: {
                            let backend = backend.clone();
                            let document_id = document.id.clone();
                            move |_| {
                                let document_id = document_id.clone();
                                let notes = notes.read().clone();
                                act(dashboard, &backend, |state| {
                                    state.review_document(document_id, decision, &notes)
                                });
                            }
                        },
                        if in_progress == Some(decision) {
                            "{decision.in_progress_label()}"
                        } else {
                            "{decision.label()}"
                        }
                    }
                }
            }
        }
    )
}
