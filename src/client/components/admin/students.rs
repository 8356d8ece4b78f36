use dioxus::prelude::*;

use arrival::state::{
    admin::{AdminAction, AdminDashboard, Section},
    bulk::{parse_bulk_students, BULK_FORMAT_HINT},
};

use super::{act, navigate};
use crate::client::{components::SectionPrompt, util::BackendApi};

#[component]
pub fn StudentsSection(dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();
    let state = dashboard.read();

    if let Some(prompt) = state.prompt(Section::Students) {
        return rsx!(SectionPrompt { text: prompt });
    }

    let selected = state.selected_student().unwrap_or_default().to_string();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "Students" }
                if state.students.is_loading() && state.students.is_empty() {
                    div { class: "skeleton h-24 w-full" }
                } else if state.students.is_empty() {
                    p { class: "text-sm opacity-70", "No students in this program yet." }
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Status" }
                                    th { "Risk" }
                                    th { "Progress" }
                                }
                            }
                            tbody {
                                for student in state.students.items() {
                                    tr {
                                        key: "{student.id}",
                                        class: "hover cursor-pointer",
                                        class: if student.id == selected { "bg-base-200" },
                                        onclick: {
                                            let backend = backend.clone();
                                            let student_id = student.id.clone();
                                            move |_| {
                                                let student_id = student_id.clone();
                                                navigate(dashboard, &backend, |state| state.select_student(student_id));
                                            }
                                        },
                                        td { "{student.full_name}" }
                                        td { "{student.personal_email}" }
                                        td { "{student.status}" }
                                        td { "{student.risk_level}" }
                                        td {
                                            match student.progress_percent() {
                                                Some(percent) => rsx!(
                                                    progress { class: "progress progress-primary w-20", value: "{percent}", max: "100" }
                                                ),
                                                None => rsx!("-"),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                BulkAdd { dashboard }
            }
        }
    )
}

/// Textarea for adding many students at once, one per line.
#[component]
fn BulkAdd(mut dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();

    let state = dashboard.read();
    let preview = parse_bulk_students(&state.bulk_input);
    let adding = state.pending() == Some(&AdminAction::AddStudents);
    let skipped = preview
        .skipped_lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    rsx!(
        div { class: "flex flex-col gap-2",
            h3 { class: "font-semibold", "Add students" }
            textarea {
                class: "textarea textarea-bordered w-full font-mono",
                rows: 4,
                placeholder: BULK_FORMAT_HINT,
                value: "{state.bulk_input}",
                oninput: move |e| dashboard.write().bulk_input = e.value(),
            }
            div { class: "flex items-center justify-between gap-2",
                span { class: "text-xs opacity-70",
                    "{preview.students.len()} valid"
                    if !preview.skipped_lines.is_empty() {
                        ", skipping line(s) {skipped}"
                    }
                }
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: state.is_busy(),
                    onclick: move |_| act(dashboard, &backend, |state| state.add_students()),
                    if adding { "Adding..." } else { "Add students" }
                }
            }
        }
    )
}
