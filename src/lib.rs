//! Arrival: study-abroad arrival checklists for program admins and students.
//!
//! - [`model`]: wire types exchanged with the Arrival backend
//! - [`api`]: typed backend client over a platform transport
//! - [`state`]: per-page state machines driven by the views
//! - `server`: the frontend server's own routes (health proxy, API docs)

pub mod api;
pub mod model;
pub mod state;

#[cfg(feature = "server")]
pub mod server;
