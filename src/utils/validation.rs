//! Input validation utilities
//!
//! Structural checks that run before any network access.

use crate::error::{CliError, ConfigError};

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "url".to_string(),
            value: url.to_string(),
            reason: "URL cannot be empty".to_string(),
        }
        .into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "url".to_string(),
            value: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate that a numeric flag is at least `minimum`
pub fn validate_minimum(flag: &str, value: i64, minimum: i64, unit: &str) -> crate::Result<()> {
    if value < minimum {
        return Err(CliError::InvalidArguments(format!(
            "Expected {} ≥ {} {}, got {}",
            flag, minimum, unit, value
        ))
        .into());
    }

    Ok(())
}
