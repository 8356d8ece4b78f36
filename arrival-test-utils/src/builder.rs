//! Declarative setup of the mock backend.
//!
//! Endpoints are queued on the [`TestBuilder`] and registered, in order, by the final `build()`
//! call. Registering in order matters when a test mocks the same path twice: mockito matches
//! the earliest mock that still has calls left.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, setup::TestSetup};

enum QueuedEndpoint {
    Json {
        method: String,
        path: String,
        status: usize,
        body: Value,
        expected: usize,
    },
    Query {
        path: String,
        query: Vec<(String, String)>,
        body: Value,
        expected: usize,
    },
    Html {
        method: String,
        path: String,
        status: usize,
        expected: usize,
    },
    Health {
        status: usize,
        body: Value,
        expected: usize,
    },
    Custom(Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>),
}

/// Builder for a [`TestSetup`] with its mock endpoints.
#[derive(Default)]
pub struct TestBuilder {
    endpoints: Vec<QueuedEndpoint>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `GET path` (any query) with a 200 JSON `body`.
    pub fn with_get(self, path: impl Into<String>, body: Value, expected_requests: usize) -> Self {
        self.with_json_endpoint("GET", path, 200, body, expected_requests)
    }

    /// Answer `POST path` with a 200 JSON `body`.
    pub fn with_post(self, path: impl Into<String>, body: Value, expected_requests: usize) -> Self {
        self.with_json_endpoint("POST", path, 200, body, expected_requests)
    }

    /// Answer `method path` with `status` and a JSON `body`.
    ///
    /// # Arguments
    /// - `method` - HTTP method, e.g. `"GET"`
    /// - `path` - Path on the mock backend, e.g. `"/api/institutions"`
    /// - `status` - Response status code
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times the endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_json_endpoint(
        mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(QueuedEndpoint::Json {
            method: method.into(),
            path: path.into(),
            status,
            body,
            expected: expected_requests,
        });
        self
    }

    /// Answer `GET path` only when every `query` pair is present.
    pub fn with_query_endpoint(
        mut self,
        path: impl Into<String>,
        query: &[(&str, &str)],
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(QueuedEndpoint::Query {
            path: path.into(),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            body,
            expected: expected_requests,
        });
        self
    }

    /// Answer `method path` with an HTML page.
    pub fn with_html_endpoint(
        mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(QueuedEndpoint::Html {
            method: method.into(),
            path: path.into(),
            status,
            expected: expected_requests,
        });
        self
    }

    /// Answer the backend health check with `status` and `body`.
    pub fn with_health_endpoint(
        mut self,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(QueuedEndpoint::Health {
            status,
            body,
            expected: expected_requests,
        });
        self
    }

    /// Register a mock built by hand on the server, for matchers the shortcuts don't cover.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.endpoints.push(QueuedEndpoint::Custom(Box::new(setup)));
        self
    }

    /// Start the mock backend and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - The running mock backend with its mocks
    /// - `Err(TestError::Json)` - A queued body failed to serialize
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for endpoint in self.endpoints {
            let mock = match endpoint {
                QueuedEndpoint::Json {
                    method,
                    path,
                    status,
                    body,
                    expected,
                } => setup
                    .backend()
                    .create_json_endpoint(&method, &path, status, &body, expected)?,
                QueuedEndpoint::Query {
                    path,
                    query,
                    body,
                    expected,
                } => {
                    let pairs: Vec<(&str, &str)> = query
                        .iter()
                        .map(|(key, value)| (key.as_str(), value.as_str()))
                        .collect();
                    setup
                        .backend()
                        .create_query_endpoint(&path, &pairs, &body, expected)?
                }
                QueuedEndpoint::Html {
                    method,
                    path,
                    status,
                    expected,
                } => setup
                    .backend()
                    .create_html_endpoint(&method, &path, status, expected),
                QueuedEndpoint::Health {
                    status,
                    body,
                    expected,
                } => setup
                    .backend()
                    .create_health_endpoint(status, &body, expected)?,
                QueuedEndpoint::Custom(builder) => builder(&mut setup.server),
            };

            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
