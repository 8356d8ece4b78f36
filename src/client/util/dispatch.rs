//! Spawning of the fetches and mutations returned by state transitions.
//!
//! Each result is fed back into the page's signal through the matching transition, and any
//! follow-up fetches it returns are dispatched in turn.

use dioxus::prelude::*;

use arrival::state::{
    admin::{AdminDashboard, AdminFetch, AdminMutation},
    apply, apply_with,
    messaging::{MessagingFetch, MessagingPanel, SendMessage},
    student::{StudentChecklist, StudentFetch, StudentMutation},
};

use crate::client::util::Api;

pub fn admin_fetches(mut dashboard: Signal<AdminDashboard>, api: Api, fetches: Vec<AdminFetch>) {
    for fetch in fetches {
        let api = api.clone();
        spawn(async move {
            let fetched = fetch.run(&api).await;
            let more = apply_with(&mut *dashboard.write(), |state| state.fetched(fetched));
            admin_fetches(dashboard, api, more);
        });
    }
}

pub fn admin_mutation(
    mut dashboard: Signal<AdminDashboard>,
    api: Api,
    mutation: Option<AdminMutation>,
) {
    let Some(mutation) = mutation else {
        return;
    };

    spawn(async move {
        let committed = mutation.commit(&api).await;
        let more = apply_with(&mut *dashboard.write(), |state| state.committed(committed));
        admin_fetches(dashboard, api, more);
    });
}

pub fn student_fetches(mut page: Signal<StudentChecklist>, api: Api, fetches: Vec<StudentFetch>) {
    for fetch in fetches {
        let api = api.clone();
        spawn(async move {
            let fetched = fetch.run(&api).await;
            apply(&mut *page.write(), |state| state.fetched(fetched));
        });
    }
}

pub fn student_mutation(
    mut page: Signal<StudentChecklist>,
    api: Api,
    mutation: Option<StudentMutation>,
) {
    let Some(mutation) = mutation else {
        return;
    };

    spawn(async move {
        let committed = mutation.commit(&api).await;
        let more = apply_with(&mut *page.write(), |state| state.committed(committed));
        student_fetches(page, api, more);
    });
}

pub fn messaging_fetches(
    mut panel: Signal<MessagingPanel>,
    api: Api,
    fetches: Vec<MessagingFetch>,
) {
    for fetch in fetches {
        let api = api.clone();
        spawn(async move {
            let fetched = fetch.run(&api).await;
            let more = apply_with(&mut *panel.write(), |state| state.fetched(fetched));
            messaging_fetches(panel, api, more);
        });
    }
}

pub fn send_message(mut panel: Signal<MessagingPanel>, api: Api, send: Option<SendMessage>) {
    let Some(send) = send else {
        return;
    };

    spawn(async move {
        let sent = send.commit(&api).await;
        let more = apply_with(&mut *panel.write(), |state| state.sent(sent));
        messaging_fetches(panel, api, more);
    });
}
