use dioxus::prelude::*;

use arrival::model::review::ReviewStatus;

#[component]
pub fn StatusBadge(status: ReviewStatus) -> Element {
    let class = match status {
        ReviewStatus::Pending => "badge-warning",
        ReviewStatus::Approved => "badge-success",
        ReviewStatus::Rejected => "badge-error",
    };

    rsx!(
        span { class: "badge badge-sm {class}", "{status.as_str()}" }
    )
}
