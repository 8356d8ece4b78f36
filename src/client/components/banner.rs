use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaXmark};
use dioxus_free_icons::Icon;

/// Error banner shown above a page's content while `message` is set.
#[component]
pub fn ErrorBanner(message: Option<String>, on_dismiss: EventHandler<()>) -> Element {
    let Some(message) = message else {
        return rsx!();
    };

    rsx!(
        div { role: "alert", class: "alert alert-error flex justify-between",
            div { class: "flex items-center gap-2",
                Icon { width: 20, height: 20, icon: FaCircleExclamation }
                span { "{message}" }
            }
            button {
                class: "btn btn-ghost btn-sm",
                onclick: move |_| on_dismiss.call(()),
                Icon { width: 16, height: 16, icon: FaXmark }
            }
        }
    )
}

/// Placeholder for a section whose parent selection is missing.
#[component]
pub fn SectionPrompt(text: &'static str) -> Element {
    rsx!(
        p { class: "text-sm opacity-70 italic", "{text}" }
    )
}
