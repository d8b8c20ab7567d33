//! # Error Types
//!
//! Structured error types for directory_core. The master/detail transitions
//! themselves never fail; errors only come from configuration that a front-end
//! hands to the core.
//!
//! ## Example
//!
//! ```rust
//! use directory_core::errors::{DirectoryError, DirectoryResult};
//!
//! fn validate_count(count: usize) -> DirectoryResult<usize> {
//!     if count > 999 {
//!         return Err(DirectoryError::invalid_setting(
//!             "record_count",
//!             count.to_string(),
//!             "ids are three digits wide",
//!         ));
//!     }
//!     Ok(count)
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for directory_core operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Structured error type for directory operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DirectoryError {
    /// A settings value is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },
}

impl DirectoryError {
    /// Create an InvalidSetting error
    pub fn invalid_setting(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DirectoryError::InvalidSetting {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DirectoryError::InvalidSetting { .. } => "INVALID_SETTING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DirectoryError::invalid_setting("record_count", "1200", "too many records");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidSetting\""));
        let roundtrip: DirectoryError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DirectoryError::invalid_setting("row_height", "0", "must be positive").error_code(),
            "INVALID_SETTING"
        );
    }

    #[test]
    fn test_error_display() {
        let error = DirectoryError::invalid_setting("master_ratio_percent", "5", "must be 10..=90");
        assert_eq!(
            error.to_string(),
            "Invalid setting 'master_ratio_percent': 5 - must be 10..=90"
        );
    }
}
