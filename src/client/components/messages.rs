use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;

use arrival::{
    model::message::{MessageDto, SenderType},
    state::{apply_with, messaging::MessagingPanel},
};

use crate::client::{
    components::ErrorBanner,
    util::{
        dispatch::{messaging_fetches, send_message},
        BackendApi,
    },
};

/// Conversation between a student and program staff.
///
/// Mount it with a `key` per student so switching students starts a fresh panel.
#[component]
pub fn MessagesPanel(student_id: String, viewer: SenderType) -> Element {
    let backend = use_context::<BackendApi>();
    let mut panel = use_signal(|| match viewer {
        SenderType::Student => MessagingPanel::for_student(student_id.clone()),
        SenderType::Admin => MessagingPanel::for_admin(),
    });

    let open_backend = backend.clone();
    use_effect(move || {
        if let Ok(api) = open_backend.clone() {
            let id = student_id.clone();
            let fetches = apply_with(&mut *panel.write(), |state| state.open(id));
            messaging_fetches(panel, api, fetches);
        }
    });

    let key_backend = backend.clone();
    let click_backend = backend.clone();

    let state = panel.read();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-3",
                h2 { class: "card-title", "Messages" }
                ErrorBanner {
                    message: state.error.clone(),
                    on_dismiss: move |_| panel.write().error = None,
                }
                if state.conversation().is_none() {
                    if state.is_loading() {
                        div { class: "skeleton h-24 w-full" }
                    }
                } else {
                    div { class: "flex flex-col max-h-96 overflow-y-auto",
                        if state.messages.is_empty() && !state.is_loading() {
                            p { class: "text-sm opacity-70", "No messages yet. Start the conversation below." }
                        }
                        for message in state.messages.items() {
                            ChatBubble {
                                key: "{message.id}",
                                message: message.clone(),
                                own: state.is_own(message),
                            }
                        }
                    }
                    div { class: "flex gap-2 items-end",
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: 2,
                            placeholder: "Write a message...",
                            value: "{state.draft}",
                            disabled: state.is_sending(),
                            oninput: move |e| panel.write().draft = e.value(),
                            onkeydown: move |e: KeyboardEvent| {
                                if e.key() == Key::Enter && !e.modifiers().shift() {
                                    e.prevent_default();
                                    submit(panel, &key_backend);
                                }
                            },
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: !state.can_send(),
                            onclick: move |_| submit(panel, &click_backend),
                            Icon { width: 16, height: 16, icon: FaPaperPlane }
                            if state.is_sending() { "Sending..." } else { "Send" }
                        }
                    }
                }
            }
        }
    )
}

fn submit(mut panel: Signal<MessagingPanel>, backend: &BackendApi) {
    if let Ok(api) = backend.clone() {
        let send = apply_with(&mut *panel.write(), MessagingPanel::send);
        send_message(panel, api, send);
    }
}

#[component]
fn ChatBubble(message: MessageDto, own: bool) -> Element {
    let side = if own { "chat-end" } else { "chat-start" };
    let author = message
        .sender_name
        .clone()
        .unwrap_or_else(|| match message.sender_type {
            SenderType::Student => "Student".to_string(),
            SenderType::Admin => "Program staff".to_string(),
        });
    let sent_at = message.created_at.format("%b %d, %H:%M").to_string();

    rsx!(
        div { class: "chat {side}",
            div { class: "chat-header text-xs",
                "{author} "
                time { class: "opacity-50", "{sent_at}" }
            }
            div { class: if own { "chat-bubble chat-bubble-primary" } else { "chat-bubble" },
                "{message.content}"
            }
        }
    )
}
