pub mod api;
pub mod dispatch;

pub use api::{backend_api, frontend_api, Api, BackendApi};
