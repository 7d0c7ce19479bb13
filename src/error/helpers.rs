use super::{CaseFilterError, ErrorCode};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to an output error carrying the original as its source
    fn to_output_error(self, message: impl Into<String>) -> Result<T, CaseFilterError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_output_error(self, message: impl Into<String>) -> Result<T, CaseFilterError> {
        self.map_err(|e| CaseFilterError::Other {
            code: ErrorCode::OTHER_OUTPUT,
            message: message.into(),
            source: Some(e.into()),
        })
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> CaseFilterError {
        let path = path.as_ref();
        CaseFilterError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            "configuration file not found",
            Some(path.to_path_buf()),
        )
    }

    /// Create a read failure for an input file
    pub fn input_io_error(path: impl AsRef<Path>) -> CaseFilterError {
        CaseFilterError::input_with_code(
            ErrorCode::INPUT_IO_ERROR,
            "read failed",
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create a parse failure for a case list
    pub fn invalid_cases(path: impl AsRef<Path>) -> CaseFilterError {
        CaseFilterError::input_with_code(
            ErrorCode::INPUT_INVALID_CASES,
            "not a case list or an array of cases",
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create a parse failure for a criteria file
    pub fn invalid_criteria(path: impl AsRef<Path>) -> CaseFilterError {
        CaseFilterError::input_with_code(
            ErrorCode::INPUT_INVALID_CRITERIA,
            "not a valid filter criteria object",
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create a timestamp validation error for a named flag
    pub fn invalid_timestamp(field: &str, raw: &str) -> CaseFilterError {
        CaseFilterError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_TIMESTAMP,
            format!("'{}' is not a date or RFC 3339 timestamp", raw),
            Some(field.to_string()),
        )
    }
}
