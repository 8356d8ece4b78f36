use dioxus::document::Title;
use dioxus::prelude::*;

use arrival::{
    model::message::SenderType,
    state::{apply, apply_with, student::StudentChecklist},
};

use crate::client::{
    components::{
        student::{ChecklistItemCard, StudentRequests},
        ErrorBanner, MessagesPanel, Page,
    },
    util::{dispatch::student_fetches, BackendApi},
};

#[component]
pub fn StudentPortal(student_id: String) -> Element {
    rsx!(
        Title { "Arrival | Checklist" }
        Page {
            StudentView { key: "{student_id}", student_id: student_id.clone() }
        }
    )
}

/// Checklist page of one student, remounted when the route's student changes.
#[component]
fn StudentView(student_id: String) -> Element {
    let backend = use_context::<BackendApi>();
    let mut page = use_signal(|| StudentChecklist::new(student_id.clone()));

    use_effect(move || match backend.clone() {
        Ok(api) => {
            let fetches = apply_with(&mut *page.write(), StudentChecklist::load);
            student_fetches(page, api, fetches);
        }
        Err(err) => apply(&mut *page.write(), |state| state.reject(err)),
    });

    let state = page.read();
    let (done, total) = state.progress();

    rsx!(
        div { class: "flex flex-col gap-4 max-w-3xl mx-auto",
            ErrorBanner {
                message: state.error.clone(),
                on_dismiss: move |_| apply(&mut *page.write(), StudentChecklist::dismiss_error),
            }
            div { class: "flex items-center justify-between gap-4",
                h1 { class: "text-2xl", "Your arrival checklist" }
                if total > 0 {
                    div { class: "flex items-center gap-2",
                        progress {
                            class: "progress progress-primary w-40",
                            value: "{done}",
                            max: "{total}",
                        }
                        span { class: "text-sm", "{done} of {total} done" }
                    }
                }
            }
            if state.items.is_loading() && state.items.is_empty() {
                div { class: "skeleton h-32 w-full" }
            } else if state.items.is_empty() {
                p { class: "opacity-70", "Your program has no checklist steps yet." }
            } else {
                ul { class: "flex flex-col gap-2",
                    for item in state.items.items() {
                        ChecklistItemCard {
                            key: "{item.checklist_step_id}",
                            page,
                            item: item.clone(),
                        }
                    }
                }
            }
            StudentRequests { page }
            MessagesPanel {
                student_id: student_id.clone(),
                viewer: SenderType::Student,
            }
        }
    )
}
