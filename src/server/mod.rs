//! Frontend server routes.
//!
//! The Dioxus fullstack server renders the application and additionally exposes a small HTTP
//! API of its own: a proxy for the backend health check and Swagger UI documenting it.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
