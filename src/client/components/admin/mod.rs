//! Sections of the admin dashboard.
//!
//! Every section reads the shared [`AdminDashboard`] signal and feeds user actions back through
//! its transitions, dispatching whatever fetches or mutation they return.

pub mod checklist;
pub mod documents;
pub mod institutions;
pub mod programs;
pub mod requests;
pub mod students;

pub use checklist::ChecklistSection;
pub use documents::DocumentsSection;
pub use institutions::InstitutionSelect;
pub use programs::ProgramsSection;
pub use requests::RequestsSection;
pub use students::StudentsSection;

use dioxus::prelude::*;

use arrival::state::{
    admin::{AdminDashboard, AdminFetch, AdminMutation},
    apply_with,
};

use crate::client::util::{
    dispatch::{admin_fetches, admin_mutation},
    BackendApi,
};

/// Run a selection change and dispatch the reads it needs.
fn navigate(
    mut dashboard: Signal<AdminDashboard>,
    backend: &BackendApi,
    transition: impl FnOnce(AdminDashboard) -> (AdminDashboard, Vec<AdminFetch>),
) {
    if let Ok(api) = backend.clone() {
        let fetches = apply_with(&mut *dashboard.write(), transition);
        admin_fetches(dashboard, api, fetches);
    }
}

/// Run a mutation transition and commit the mutation it produced, if any.
fn act(
    mut dashboard: Signal<AdminDashboard>,
    backend: &BackendApi,
    transition: impl FnOnce(AdminDashboard) -> (AdminDashboard, Option<AdminMutation>),
) {
    if let Ok(api) = backend.clone() {
        let mutation = apply_with(&mut *dashboard.write(), transition);
        admin_mutation(dashboard, api, mutation);
    }
}
