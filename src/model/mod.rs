//! Data transfer objects for the Arrival backend REST API.
//!
//! Every entity here is owned by the backend; the client only holds read-through copies for the
//! lifetime of a page. Request bodies sent by the client live next to the entity they create or
//! mutate.

use serde::de::DeserializeOwned;

pub mod api;
pub mod checklist;
pub mod document;
pub mod institution;
pub mod message;
pub mod program;
pub mod request;
pub mod review;
pub mod student;
pub mod timestamp;

/// A collection resource the backend returns either as a bare JSON array or wrapped in an
/// envelope object holding the array under [`Resource::ENVELOPE`].
pub trait Resource: DeserializeOwned {
    /// Plural name used in error messages, e.g. `"institutions"`.
    const NAME: &'static str;
    /// Key of the array inside an enveloped response, e.g. `{"institutions": [...]}`.
    const ENVELOPE: &'static str;
}
