use dioxus::prelude::*;

use crate::client::{router::Route, util::backend_api};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let _backend = use_context_provider(backend_api);

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
