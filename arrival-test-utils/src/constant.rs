/// Content type of every JSON mock response
pub static JSON_CONTENT_TYPE: &str = "application/json";

/// Path of the backend health check, relative to the mock server
pub static HEALTH_PATH: &str = "/api/health";
