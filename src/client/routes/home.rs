use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaUserGear};
use dioxus_free_icons::Icon;

use arrival::state::health::HealthCheck;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::util::frontend_api;

/// Status line of the backend, checked once through the frontend server's proxy.
#[component]
fn BackendHealth() -> Element {
    let mut health = use_signal(HealthCheck::default);

    use_effect(move || {
        spawn(async move {
            let result = frontend_api().backend_health().await;
            health.set(HealthCheck::from_result(result));
        });
    });

    let class = match &*health.read() {
        HealthCheck::Checking => "opacity-70",
        HealthCheck::Reported(_) => "text-success",
        HealthCheck::Failed(_) => "text-error",
    };

    rsx!(
        p { class: "text-sm",
            "Backend health: "
            span { class: "{class}", "{health.read().label()}" }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Arrival" }
        Meta {
            name: "description",
            content: "Arrival checklists for study abroad programs."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-xl text-center",
                p { class: "text-2xl", "Arrival" }
                p {
                    "Programs publish an arrival checklist, students work through it and upload the documents it asks for, and staff review them and answer requests."
                }
                p { class: "text-sm opacity-70",
                    "Students open their checklist from the link they were sent, at /student/<id>."
                }
                BackendHealth {}
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link { to: Route::Admin {}, class: "btn btn-primary w-48 flex gap-2",
                            Icon { width: 20, height: 20, icon: FaUserGear }
                            "Admin dashboard"
                        }
                    }
                    li {
                        a { href: "/api/docs", class: "btn btn-outline w-48 flex gap-2",
                            Icon { width: 20, height: 20, icon: FaBook }
                            "API Docs"
                        }
                    }
                }
            }
        }
    )
}
