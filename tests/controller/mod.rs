mod health;

use std::time::Duration;

use arrival::server::{config::Config, model::app::AppState};
use arrival_test_utils::prelude::*;

/// Server state proxying health checks to the test's mock backend.
fn app_state(test: &TestSetup) -> AppState {
    let config = Config {
        backend_health_url: test.health_url(),
        backend_timeout: Duration::from_secs(5),
    };

    AppState::new(config, reqwest::Client::new())
}
