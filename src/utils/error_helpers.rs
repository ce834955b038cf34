use crate::error::{ApiError, DisplayError};
use std::time::Duration;

/// Helper functions for standardizing error conversions across the codebase
/// Convert reqwest errors to ApiError with endpoint context
/// `timeout` is the deadline that was in effect for the request
pub fn convert_request_error(error: reqwest::Error, endpoint: &str, timeout: Duration) -> ApiError {
    if error.is_timeout() {
        return ApiError::Timeout {
            timeout_secs: timeout.as_secs(),
            endpoint: endpoint.to_string(),
        };
    }

    match error.status() {
        Some(status) => ApiError::Http {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            message: error.to_string(),
        },
        None => ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: error.to_string(),
        },
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_json_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    ApiError::Http {
        status: 0,
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", error),
    }
}

/// Convert serde_json serialization errors to DisplayError
pub fn convert_serialize_error(error: serde_json::Error) -> DisplayError {
    DisplayError::Json(error.to_string())
}
