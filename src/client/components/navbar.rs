use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl font-semibold",
                        "Arrival"
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                Link {
                    to: Route::Admin {},
                    class: "btn btn-ghost",
                    "Admin"
                }
            }
        }

        Outlet::<Route> {}
    }
}
