use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-2",
                p { class: "text-2xl", "Page not found" }
                p { class: "opacity-70", "/{path}" }
                Link { to: Route::Home {}, class: "btn btn-outline", "Back home" }
            }
        }
    )
}
