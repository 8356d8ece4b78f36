use dioxus::prelude::*;

use arrival::state::admin::AdminDashboard;

use super::navigate;
use crate::client::util::BackendApi;

#[component]
pub fn InstitutionSelect(dashboard: Signal<AdminDashboard>) -> Element {
    let backend = use_context::<BackendApi>();
    let state = dashboard.read();
    let selected = state.selected_institution().unwrap_or_default().to_string();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body gap-2",
                h2 { class: "card-title", "Institution" }
                if state.institutions.is_loading() && state.institutions.is_empty() {
                    div { class: "skeleton h-10 w-full" }
                } else if state.institutions.is_empty() {
                    p { class: "text-sm opacity-70", "No institutions found." }
                } else {
                    select {
                        class: "select select-bordered w-full",
                        value: "{selected}",
                        onchange: move |e| {
                            let institution_id = e.value();
                            navigate(dashboard, &backend, |state| state.select_institution(institution_id));
                        },
                        for institution in state.institutions.items() {
                            option {
                                key: "{institution.id}",
                                value: "{institution.id}",
                                selected: institution.id == selected,
                                "{institution.name}"
                                if let Some(country) = &institution.country {
                                    " ({country})"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
