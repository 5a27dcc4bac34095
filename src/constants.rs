//! Application constants and configuration

pub const APP_NAME: &str = "User Details Form";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Endpoint the form posts to unless overridden
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/user-details";
/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "USER_DETAILS_ENDPOINT";

pub const SUCCESS_MESSAGE: &str = "User details sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send user details";

/// Suggested values for the gender drop-down (stored as plain strings)
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];
