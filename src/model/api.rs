use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend for failed requests.
///
/// `detail` is either a plain message or, for request validation failures, a list of objects
/// each carrying a `msg` field.
#[derive(Debug, Default, Deserialize)]
pub struct BackendErrorDto {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl BackendErrorDto {
    /// Human-readable message extracted from `detail`, if it holds one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(message) if !message.trim().is_empty() => {
                Some(message.trim().to_string())
            }
            Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| match entry {
                        Value::String(message) => Some(message.as_str()),
                        Value::Object(fields) => fields.get("msg").and_then(Value::as_str),
                        _ => None,
                    })
                    .collect();

                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// JSON error body returned by the frontend server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Always `"error"`
    pub status: String,
    /// What went wrong
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
