//! Client for the Arrival backend REST API.
//!
//! [`ArrivalApi`] wraps every endpoint the pages use behind typed methods. It is generic over a
//! [`Transport`] so the same request, status and envelope handling runs in the browser
//! ([`web::WebTransport`]) and natively ([`native::NativeTransport`]).

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod sync;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use client::ArrivalApi;
pub use error::ApiError;
pub use sync::write_through;
pub use transport::Transport;

/// Transport of the platform being compiled for
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = native::NativeTransport;
/// Transport of the platform being compiled for
#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = web::WebTransport;
