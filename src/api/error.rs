use thiserror::Error;

use crate::model::api::BackendErrorDto;

/// Failure of a call against the Arrival backend, or of the validation guarding it.
///
/// Every variant renders (via `Display`) the message shown in a page's error banner. None of
/// them are retried automatically; the user retries the triggering action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The base URL of the backend was not configured at build time.
    #[error("API base URL is not set")]
    NotConfigured,
    /// The request never produced an HTTP response (network failure, CORS, DNS).
    #[error("Failed to {action}: {message}")]
    Transport {
        action: &'static str,
        message: String,
    },
    /// The backend answered with a non-2xx status.
    #[error("{}", status_message(.action, *.status, .detail.as_deref()))]
    Status {
        action: &'static str,
        status: u16,
        detail: Option<String>,
    },
    /// The backend answered with something other than JSON, typically an HTML error page.
    #[error("Backend did not return JSON for {resource}")]
    NotJson { resource: &'static str },
    /// The JSON body was neither an array nor the expected envelope object.
    #[error("Unexpected {resource} response shape")]
    UnexpectedShape { resource: &'static str },
    /// The JSON body had the right shape but its entries did not decode.
    #[error("Failed to parse {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },
    /// Client-side validation rejected the action before any request was sent.
    #[error("{0}")]
    Validation(String),
}

fn status_message(action: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("Failed to {} ({})", action, status),
    }
}

impl ApiError {
    /// Build a status error from a failed response, reading `detail` from the body if present.
    pub fn from_status(action: &'static str, status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<BackendErrorDto>(body)
            .ok()
            .and_then(|dto| dto.message());

        Self::Status {
            action,
            status,
            detail,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
