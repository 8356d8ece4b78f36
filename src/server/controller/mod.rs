//! HTTP handlers served by the frontend server.

pub mod health;
