//! Helpers shared by the integration tests.

use arrival::api::{native::NativeTransport, ArrivalApi};
use arrival_test_utils::TestSetup;

/// Client pointed at the test's mock backend.
pub fn api(test: &TestSetup) -> ArrivalApi<NativeTransport> {
    ArrivalApi::new(test.url(), NativeTransport::default())
}
