use dioxus::prelude::*;

use arrival::state::admin::{AdminAction, AdminDashboard, Section};

use super::act;
use crate::client::{components::SectionPrompt, util::BackendApi};

/// Checklist steps of the selected program, with the step form and template loader.
#[component]
pub fn ChecklistSection(mut dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();
    let template_backend = backend.clone();

    let state = dashboard.read();

    if let Some(prompt) = state.prompt(Section::Checklist) {
        return rsx!(SectionPrompt { text: prompt });
    }

    let form = &state.step_form;
    let creating = state.pending() == Some(&AdminAction::CreateStep);
    let applying = state.pending() == Some(&AdminAction::ApplyTemplate);

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "Checklist" }
                if state.checklist.is_loading() && state.checklist.is_empty() {
                    div { class: "skeleton h-24 w-full" }
                } else if state.checklist.is_empty() {
                    p { class: "text-sm opacity-70", "No steps yet. Add one or apply a template." }
                } else {
                    ol { class: "list",
                        for step in state.checklist.items() {
                            li { key: "{step.id}", class: "list-row",
                                span { class: "opacity-50", "{step.sort_order}" }
                                div {
                                    p { class: "font-semibold", "{step.title}" }
                                    if let Some(description) = &step.description {
                                        p { class: "text-xs opacity-70", "{description}" }
                                    }
                                }
                                div { class: "flex gap-1",
                                    if let Some(category) = &step.category {
                                        span { class: "badge badge-ghost badge-sm", "{category}" }
                                    }
                                    if step.is_required {
                                        span { class: "badge badge-outline badge-sm", "Required" }
                                    }
                                }
                            }
                        }
                    }
                }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        act(dashboard, &backend, |state| state.create_step());
                    },
                    h3 { class: "font-semibold", "Add a new checklist step" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Title",
                        value: "{form.title}",
                        oninput: move |e| dashboard.write().step_form.title = e.value(),
                    }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Category (optional)",
                        value: "{form.category}",
                        oninput: move |e| dashboard.write().step_form.category = e.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Description (optional)",
                        value: "{form.description}",
                        oninput: move |e| dashboard.write().step_form.description = e.value(),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-sm self-end",
                        disabled: state.is_busy() || !form.is_submittable(),
                        if creating { "Adding..." } else { "Add step" }
                    }
                }
                div { class: "join w-full",
                    input {
                        class: "input input-bordered join-item w-full",
                        placeholder: "Template name",
                        value: "{state.template}",
                        oninput: move |e| dashboard.write().template = e.value(),
                    }
                    button {
                        class: "btn join-item",
                        disabled: state.is_busy(),
                        onclick: move |_| act(dashboard, &template_backend, |state| state.apply_template()),
                        if applying { "Applying..." } else { "Apply template" }
                    }
                }
            }
        }
    )
}
