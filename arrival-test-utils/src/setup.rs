use mockito::{Mock, Server, ServerGuard};

use crate::{constant::HEALTH_PATH, error::TestError, fixtures::BackendFixtures};

/// Running mock backend plus the mocks registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock backend, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Full URL of the mock backend's health check.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.server.url(), HEALTH_PATH)
    }

    /// Access endpoint helpers for registering further mocks mid-test.
    pub fn backend(&mut self) -> BackendFixtures<'_> {
        BackendFixtures::new(self)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
