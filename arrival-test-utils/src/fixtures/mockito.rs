//! Mock endpoint creation on the test backend.
//!
//! Each helper registers a mock on the mockito server that verifies it was called exactly
//! `expected_requests` times when [`TestSetup::assert_mocks`](crate::TestSetup::assert_mocks)
//! runs.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{HEALTH_PATH, JSON_CONTENT_TYPE},
    error::TestError,
    fixtures::BackendFixtures,
};

impl<'a> BackendFixtures<'a> {
    /// Create a mock endpoint answering `method path` with `status` and a JSON `body`.
    ///
    /// Query strings are not matched; use [`Self::create_query_endpoint`] to require one.
    ///
    /// # Returns
    /// - `Ok(Mock)` - The created mock endpoint
    /// - `Err(TestError::Json)` - `body` failed to serialize
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", JSON_CONTENT_TYPE)
            .with_body(serde_json::to_string(body)?)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `GET path` endpoint that only matches when every `query` pair is present.
    pub fn create_query_endpoint(
        &mut self,
        path: &str,
        query: &[(&str, &str)],
        body: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let matchers = query
            .iter()
            .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
            .collect();

        Ok(self
            .setup
            .server
            .mock("GET", path)
            .match_query(Matcher::AllOf(matchers))
            .with_status(200)
            .with_header("content-type", JSON_CONTENT_TYPE)
            .with_body(serde_json::to_string(body)?)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock endpoint answering with an HTML page, as a misrouted proxy would.
    pub fn create_html_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "text/html")
            .with_body("<!doctype html><html><body>Not Found</body></html>")
            .expect(expected_requests)
            .create()
    }

    /// Create the backend health check endpoint.
    pub fn create_health_endpoint(
        &mut self,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        self.create_json_endpoint("GET", HEALTH_PATH, status, body, expected_requests)
    }
}
