use std::error::Error as StdError;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// Error type for loading inputs and configuration
///
/// Filtering itself never fails; these only arise at the I/O boundary.
#[derive(Error, Debug)]
pub enum CaseFilterError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CaseFilterError {
    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Validation { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Validation { .. } => 4,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Validation { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Input { message, path, .. } => match path {
                Some(p) => format!("Could not read {}: {}", p.display(), message),
                None => format!("Input error: {}", message),
            },
            Self::Validation { message, field, .. } => match field {
                Some(f) => format!("Invalid value for {}: {}", f, message),
                None => format!("Validation failed: {}", message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        out
    }
}

/// Type alias for Results using CaseFilterError
pub type Result<T> = std::result::Result<T, CaseFilterError>;
