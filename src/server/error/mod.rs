//! Error types for the frontend server.

pub mod config;
pub mod health;

use thiserror::Error;

/// Failure while starting the frontend server.
#[derive(Error, Debug)]
pub enum Error {
    /// The upstream HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
