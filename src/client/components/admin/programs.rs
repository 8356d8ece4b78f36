use dioxus::prelude::*;

use arrival::{
    model::program::ProgramType,
    state::admin::{AdminAction, AdminDashboard, Section},
};

use super::{act, navigate};
use crate::client::{components::SectionPrompt, util::BackendApi};

/// Programs of the selected institution and the form to add one.
#[component]
pub fn ProgramsSection(dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();
    let state = dashboard.read();

    if let Some(prompt) = state.prompt(Section::Programs) {
        return rsx!(SectionPrompt { text: prompt });
    }

    let selected = state.selected_program().unwrap_or_default().to_string();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "Programs" }
                if state.programs.is_loading() && state.programs.is_empty() {
                    div { class: "skeleton h-16 w-full" }
                } else if state.programs.is_empty() {
                    p { class: "text-sm opacity-70", "This institution has no programs yet. Create one below." }
                } else {
                    ul { class: "menu bg-base-200 rounded-box w-full",
                        for program in state.programs.items() {
                            li { key: "{program.id}",
                                a {
                                    class: if program.id == selected { "menu-active" },
                                    onclick: {
                                        let backend = backend.clone();
                                        let program_id = program.id.clone();
                                        move |_| {
                                            let program_id = program_id.clone();
                                            navigate(dashboard, &backend, |state| state.select_program(program_id));
                                        }
                                    },
                                    span { "{program.name}" }
                                    span { class: "text-xs opacity-70", "{program.term_label}" }
                                    span { class: "badge badge-ghost badge-sm", "{program.program_type.label()}" }
                                }
                            }
                        }
                    }
                }
                ProgramForm { dashboard }
            }
        }
    )
}

#[component]
fn ProgramForm(mut dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        act(dashboard, &backend, |state| state.create_program());
    };

    let state = dashboard.read();
    let form = &state.program_form;
    let creating = state.pending() == Some(&AdminAction::CreateProgram);

    rsx!(
        form { class: "flex flex-col gap-2", onsubmit: on_submit,
            h3 { class: "font-semibold", "New program" }
            input {
                class: "input input-bordered w-full",
                placeholder: "Program name",
                value: "{form.name}",
                oninput: move |e| dashboard.write().program_form.name = e.value(),
            }
            input {
                class: "input input-bordered w-full",
                placeholder: "Term (e.g. Fall 2026)",
                value: "{form.term_label}",
                oninput: move |e| dashboard.write().program_form.term_label = e.value(),
            }
            div { class: "flex gap-2",
                input {
                    r#type: "date",
                    class: "input input-bordered",
                    value: "{form.term_start_date}",
                    oninput: move |e| dashboard.write().program_form.term_start_date = e.value(),
                }
                select {
                    class: "select select-bordered",
                    value: "{form.program_type.as_str()}",
                    onchange: move |e| {
                        if let Some(program_type) = ProgramType::from_wire(&e.value()) {
                            dashboard.write().program_form.program_type = program_type;
                        }
                    },
                    for program_type in ProgramType::ALL {
                        option {
                            value: "{program_type.as_str()}",
                            selected: program_type == form.program_type,
                            "{program_type.label()}"
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary btn-sm self-end",
                disabled: state.is_busy(),
                if creating { "Creating..." } else { "Create program" }
            }
        }
    )
}
