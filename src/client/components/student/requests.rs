use dioxus::prelude::*;

use arrival::{
    model::request::RecipientType,
    state::{apply_with, student::StudentChecklist},
};

use crate::client::{
    components::StatusBadge,
    util::{dispatch::student_mutation, BackendApi},
};

/// The student's requests and the form for filing a new one.
#[component]
pub fn StudentRequests(mut page: Signal<StudentChecklist>) -> Element {
    let backend = use_context::<BackendApi>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if let Ok(api) = backend.clone() {
            let mutation = apply_with(&mut *page.write(), StudentChecklist::submit_request);
            student_mutation(page, api, mutation);
        }
    };

    let state = page.read();
    let form = &state.request_form;

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "Requests" }
                form { class: "flex flex-col gap-2", onsubmit: on_submit,
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Request type (e.g. Housing, Visa letter)",
                        value: "{form.request_type}",
                        oninput: move |e| page.write().request_form.request_type = e.value(),
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Describe what you need",
                        value: "{form.description}",
                        oninput: move |e| page.write().request_form.description = e.value(),
                    }
                    div { class: "flex gap-2 items-center",
                        select {
                            class: "select select-bordered",
                            value: "{form.recipient_type.as_str()}",
                            onchange: move |e| {
                                if let Some(recipient) = RecipientType::from_wire(&e.value()) {
                                    page.write().request_form.recipient_type = recipient;
                                }
                            },
                            for recipient in RecipientType::ALL {
                                option {
                                    value: "{recipient.as_str()}",
                                    selected: recipient == form.recipient_type,
                                    "{recipient.label()}"
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: state.is_submitting_request(),
                            if state.is_submitting_request() { "Submitting..." } else { "Submit request" }
                        }
                    }
                }
                if state.requests.is_loading() && state.requests.is_empty() {
                    div { class: "skeleton h-12 w-full" }
                } else if state.requests.is_empty() {
                    p { class: "text-sm opacity-70", "You have not filed any requests." }
                } else {
                    ul { class: "flex flex-col gap-2",
                        for request in state.requests.items() {
                            li { key: "{request.id}", class: "border border-base-300 rounded-box p-3",
                                div { class: "flex justify-between items-center",
                                    span { class: "font-semibold", "{request.request_type}" }
                                    StatusBadge { status: request.status }
                                }
                                p { class: "text-sm", "{request.description}" }
                                p { class: "text-xs opacity-70", "To: {request.recipient_type.label()}" }
                                if let Some(notes) = &request.admin_notes {
                                    p { class: "text-xs italic", "Reply: {notes}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
