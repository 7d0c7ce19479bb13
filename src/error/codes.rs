/// Error code registry
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Input errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_YAML: u16 = 1002;
    pub const CONFIG_INVALID_JSON: u16 = 1003;
    pub const CONFIG_INVALID_TOML: u16 = 1004;
    pub const CONFIG_UNSUPPORTED_FORMAT: u16 = 1005;

    // Input errors (3000-3999)
    pub const INPUT_IO_ERROR: u16 = 3002;
    pub const INPUT_INVALID_CASES: u16 = 3003;
    pub const INPUT_INVALID_CRITERIA: u16 = 3004;

    // Validation errors (7000-7999)
    pub const VALIDATION_INVALID_TIMESTAMP: u16 = 7001;

    // Other errors (9000-9999)
    pub const OTHER_OUTPUT: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_YAML => "Configuration is not valid YAML",
        ErrorCode::CONFIG_INVALID_JSON => "Configuration is not valid JSON",
        ErrorCode::CONFIG_INVALID_TOML => "Configuration is not valid TOML",
        ErrorCode::CONFIG_UNSUPPORTED_FORMAT => "Unsupported configuration file format",

        ErrorCode::INPUT_IO_ERROR => "Input could not be read",
        ErrorCode::INPUT_INVALID_CASES => "Case list could not be parsed",
        ErrorCode::INPUT_INVALID_CRITERIA => "Filter criteria could not be parsed",

        ErrorCode::VALIDATION_INVALID_TIMESTAMP => "Timestamp could not be parsed",

        ErrorCode::OTHER_OUTPUT => "Result could not be written",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_are_described() {
        assert_eq!(
            describe_error_code(ErrorCode::INPUT_INVALID_CASES),
            "Case list could not be parsed"
        );
        assert_eq!(describe_error_code(4242), "Unknown error code");
    }
}
