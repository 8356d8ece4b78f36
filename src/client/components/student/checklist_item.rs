use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaFileArrowUp};
use dioxus_free_icons::Icon;

use arrival::{
    api::ApiError,
    model::checklist::StudentChecklistItemDto,
    state::{
        apply, apply_with,
        gate::{self, DocumentState},
        student::StudentChecklist,
    },
};

use crate::client::util::{dispatch::student_mutation, BackendApi};

#[component]
pub fn ChecklistItemCard(
    mut page: Signal<StudentChecklist>,
    item: StudentChecklistItemDto,
) -> Element {
    let backend = use_context::<BackendApi>();

    let step_id = item.checklist_step_id.clone();
    let saving = page.read().is_saving(&step_id);
    let blocker = gate::completion_blocker(&item);
    let document_state = DocumentState::of(&item);

    let mark_backend = backend.clone();
    let mark_step = step_id.clone();
    let on_mark_done = move |_| {
        if let Ok(api) = mark_backend.clone() {
            let mutation = apply_with(&mut *page.write(), |state| state.mark_done(&mark_step));
            student_mutation(page, api, mutation);
        }
    };

    let upload_step = step_id.clone();
    let on_upload = move |evt: FormEvent| {
        let backend = backend.clone();
        let step_id = upload_step.clone();

        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };

            let file_name = file.name();
            let content_type = file
                .content_type()
                .unwrap_or_else(|| "application/octet-stream".to_string());

            match file.read_bytes().await {
                Ok(bytes) => {
                    if let Ok(api) = backend {
                        let mutation = apply_with(&mut *page.write(), |state| {
                            state.upload(&step_id, file_name, content_type, bytes.to_vec())
                        });
                        student_mutation(page, api, mutation);
                    }
                }
                Err(e) => apply(&mut *page.write(), |state| {
                    state.reject(ApiError::validation(format!(
                        "Failed to read {}: {}",
                        file_name, e
                    )))
                }),
            }
        }
    };

    rsx!(
        li { class: "card bg-base-100 shadow-sm",
            div { class: "card-body p-4 gap-2",
                div { class: "flex items-center justify-between gap-2",
                    div { class: "flex items-center gap-2",
                        if item.is_done() {
                            Icon { width: 18, height: 18, class: "text-success", icon: FaCircleCheck }
                        }
                        h3 { class: "font-semibold", "{item.title}" }
                        if let Some(category) = &item.category {
                            span { class: "badge badge-ghost badge-sm", "{category}" }
                        }
                        if !item.is_required {
                            span { class: "badge badge-outline badge-sm", "Optional" }
                        }
                    }
                    if item.requires_document {
                        span { class: "text-xs opacity-70", "{document_state.label()}" }
                    }
                }
                if let Some(description) = &item.description {
                    p { class: "text-sm", "{description}" }
                }
                if let Some(completed_at) = item.completed_at {
                    p { class: "text-xs opacity-70",
                        "Completed {completed_at.format(\"%b %d, %Y\")}"
                    }
                }
                div { class: "card-actions items-center justify-end",
                    if gate::can_upload(&item) {
                        label { class: "btn btn-outline btn-sm",
                            class: if saving { "btn-disabled" },
                            Icon { width: 14, height: 14, icon: FaFileArrowUp }
                            "Upload document"
                            input {
                                r#type: "file",
                                class: "hidden",
                                disabled: saving,
                                onchange: on_upload,
                            }
                        }
                    }
                    if !item.is_done() {
                        button {
                            class: "btn btn-primary btn-sm",
                            title: blocker.unwrap_or_default(),
                            disabled: saving || blocker.is_some(),
                            onclick: on_mark_done,
                            if saving { "Saving..." } else { "Mark as done" }
                        }
                    }
                }
                if !item.is_done() {
                    if let Some(reason) = blocker {
                        p { class: "text-xs text-warning", "{reason}" }
                    }
                }
            }
        }
    )
}
