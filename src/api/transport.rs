//! Transport abstraction between [`ArrivalApi`](crate::api::ArrivalApi) and an HTTP stack.
//!
//! The browser build sends requests through `reqwasm`, native builds (server, desktop, tests)
//! through `reqwest`. Transports only move bytes; status and body interpretation happen in the
//! client so both stacks behave the same.

use std::future::Future;

use serde_json::Value;

use crate::model::document::DocumentUpload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Multipart(DocumentUpload),
}

/// A request relative to the backend base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Body,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(path)
        }
    }

    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    pub fn multipart(mut self, upload: DocumentUpload) -> Self {
        self.body = Body::Multipart(upload);
        self
    }

    /// Absolute URL without the query string.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }
}

/// Status, content type and body text of a response, read eagerly.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.contains("application/json"))
    }
}

/// Sends an [`ApiRequest`] and reads the whole response.
///
/// The error string describes a failure to obtain any response at all. The returned future is
/// not required to be `Send` since browser futures are not.
pub trait Transport {
    fn send(
        &self,
        base_url: &str,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, String>>;
}
