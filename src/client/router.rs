use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Admin, Home, NotFound, StudentPortal},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/admin")]
    Admin {},

    #[route("/student/:student_id")]
    StudentPortal { student_id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
