use dioxus::prelude::*;

use arrival::{
    model::{
        request::{RecipientType, StudentRequestDto},
        review::{ReviewDecision, ReviewStatus},
    },
    state::admin::{AdminAction, AdminDashboard, Section},
};

use super::{act, navigate};
use crate::client::{
    components::{SectionPrompt, StatusBadge},
    util::BackendApi,
};

/// Request queue of one recipient, defaulting to the selected program's type.
#[component]
pub fn RequestsSection(dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();
    let state = dashboard.read();

    if let Some(prompt) = state.prompt(Section::Requests) {
        return rsx!(SectionPrompt { text: prompt });
    }

    let queue = &state.requests;
    let pending = queue.pending_count();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title",
                        "Requests"
                        if pending > 0 {
                            span { class: "badge badge-warning", "{pending} pending" }
                        }
                    }
                    div { class: "join",
                        for recipient in RecipientType::ALL {
                            button {
                                class: "btn btn-sm join-item",
                                class: if recipient == queue.recipient { "btn-active" },
                                onclick: {
                                    let backend = backend.clone();
                                    move |_| navigate(dashboard, &backend, |state| state.switch_request_recipient(recipient))
                                },
                                "{recipient.label()}"
                            }
                        }
                    }
                }
                if queue.requests.is_loading() && queue.requests.is_empty() {
                    div { class: "skeleton h-16 w-full" }
                } else if queue.requests.is_empty() {
                    p { class: "text-sm opacity-70", "No requests for {queue.recipient.label()}." }
                } else {
                    ul { class: "flex flex-col gap-2",
                        for request in queue.requests.items() {
                            RequestRow {
                                key: "{request.id}",
                                dashboard,
                                request: request.clone(),
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn RequestRow(dashboard: Signal<AdminDashboard>, request: StudentRequestDto) -> Element {
    let backend = use_context::<BackendApi>();
    let mut notes = use_signal(String::new);

    let state = dashboard.read();
    let in_progress = match state.pending() {
        Some(AdminAction::ReviewRequest {
            request_id,
            decision,
        }) if *request_id == request.id => Some(*decision),
        _ => None,
    };
    let student_name = state
        .students
        .items()
        .iter()
        .find(|student| student.id == request.student_id)
        .map(|student| student.full_name.clone())
        .unwrap_or_else(|| request.student_id.clone());

    rsx!(
        li { class: "border border-base-300 rounded-box p-3 flex flex-col gap-2",
            div { class: "flex justify-between items-center",
                span { class: "font-semibold", "{request.request_type}" }
                StatusBadge { status: request.status }
            }
            p { class: "text-xs opacity-70", "From {student_name}" }
            p { class: "text-sm", "{request.description}" }
            if let Some(admin_notes) = &request.admin_notes {
                p { class: "text-xs italic", "Reply: {admin_notes}" }
            }
            if request.status == ReviewStatus::Pending {
                div { class: "flex gap-2 items-center",
                    input {
                        class: "input input-bordered input-sm w-full",
                        placeholder: "Reply (optional)",
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
                                let request_id = request.id.clone();
                                move |_| {
                                    let request_id = request_id.clone();
                                    let notes = notes.read().clone();
                                    act(dashboard, &backend, |state| {
                                        state.review_request(request_id, decision, &notes)
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
        }
    )
}
