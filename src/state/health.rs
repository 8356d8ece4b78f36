//! Backend health line on the home page.

use serde_json::Value;

use crate::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum HealthCheck {
    #[default]
    Checking,
    Reported(String),
    Failed(String),
}

impl HealthCheck {
    pub fn from_result(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(body) => Self::Reported(describe(&body)),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Checking => "checking...".to_string(),
            Self::Reported(status) => status.clone(),
            Self::Failed(message) => format!("Error: {}", message),
        }
    }
}

/// The `status` field of a health body, or the whole body when it has none.
pub fn describe(body: &Value) -> String {
    match body.get("status").and_then(Value::as_str) {
        Some(status) => status.to_string(),
        None => body.to_string(),
    }
}
