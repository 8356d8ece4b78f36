use dioxus::document::Title;
use dioxus::prelude::*;

use arrival::{
    model::message::SenderType,
    state::{
        admin::{AdminDashboard, Section},
        apply, apply_with,
    },
};

use crate::client::{
    components::{
        admin::{
            ChecklistSection, DocumentsSection, InstitutionSelect, ProgramsSection,
            RequestsSection, StudentsSection,
        },
        ErrorBanner, MessagesPanel, Page, SectionPrompt,
    },
    util::{dispatch::admin_fetches, BackendApi},
};

#[component]
pub fn Admin() -> Element {
    let backend = use_context::<BackendApi>();
    let mut dashboard = use_signal(AdminDashboard::default);

    use_effect(move || match backend.clone() {
        Ok(api) => {
            let fetches = apply_with(&mut *dashboard.write(), AdminDashboard::load);
            admin_fetches(dashboard, api, fetches);
        }
        Err(err) => apply(&mut *dashboard.write(), |state| state.reject(err)),
    });

    let state = dashboard.read();
    let messages_prompt = state.prompt(Section::Messages);
    let selected_student = state.selected_student().map(str::to_string);

    rsx!(
        Title { "Arrival | Admin" }
        Page {
            div { class: "flex flex-col gap-4 max-w-6xl mx-auto",
                ErrorBanner {
                    message: state.error.clone(),
                    on_dismiss: move |_| apply(&mut *dashboard.write(), AdminDashboard::dismiss_error),
                }
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-4",
                    div { class: "flex flex-col gap-4",
                        InstitutionSelect { dashboard }
                        ProgramsSection { dashboard }
                    }
                    div { class: "flex flex-col gap-4 lg:col-span-2",
                        StudentsSection { dashboard }
                        ChecklistSection { dashboard }
                    }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                    DocumentsSection { dashboard }
                    RequestsSection { dashboard }
                }
                match (selected_student, messages_prompt) {
                    (Some(student_id), None) => rsx!(
                        MessagesPanel {
                            key: "{student_id}",
                            student_id: student_id.clone(),
                            viewer: SenderType::Admin,
                        }
                    ),
                    (_, prompt) => rsx!(
                        SectionPrompt { text: prompt.unwrap_or_default() }
                    ),
                }
            }
        }
    )
}

