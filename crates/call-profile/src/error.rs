//! Error handling for the call profile library
//!
//! Accessors, mutators, translators and the extras sanitizer never fail.
//! Errors only come out of the paths that convert foreign data into a
//! profile: integer codes into enumerations, the wire decoder and the
//! configuration loader.

use std::fmt;
use thiserror::Error;

/// Result type alias for call profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Error type for call profile operations
#[derive(Error, Debug)]
pub enum ProfileError {
    /// An integer code does not name a value of the given enumeration
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i32 },

    /// The wire header carries a version this build cannot read
    #[error("Unsupported wire version: {found} (supported: {supported})")]
    UnsupportedVersion { found: u16, supported: u16 },

    /// Encoding a profile failed
    #[error("Encoding failed: {reason}")]
    EncodingFailed { reason: String },

    /// Decoding a profile failed
    #[error("Decoding failed: {reason}")]
    DecodingFailed { reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    /// I/O operation failed
    #[error("I/O operation failed: {reason}")]
    IoError { reason: String },
}

impl ProfileError {
    /// Create a new unknown code error
    pub fn unknown_code(kind: &'static str, code: i32) -> Self {
        Self::UnknownCode { kind, code }
    }

    /// Create a new encoding failed error
    pub fn encoding_failed(reason: impl Into<String>) -> Self {
        Self::EncodingFailed {
            reason: reason.into(),
        }
    }

    /// Create a new decoding failed error
    pub fn decoding_failed(reason: impl Into<String>) -> Self {
        Self::DecodingFailed {
            reason: reason.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCode { .. } => ErrorCategory::Conversion,

            Self::UnsupportedVersion { .. }
            | Self::EncodingFailed { .. }
            | Self::DecodingFailed { .. } => ErrorCategory::Wire,

            Self::InvalidConfig { .. } => ErrorCategory::Configuration,

            Self::IoError { .. } => ErrorCategory::Io,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Integer code to enumeration conversion
    Conversion,
    /// Wire encode/decode
    Wire,
    /// Configuration loading and validation
    Configuration,
    /// I/O related errors
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conversion => write!(f, "Conversion"),
            Self::Wire => write!(f, "Wire"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Io => write!(f, "I/O"),
        }
    }
}

/// Convert from I/O errors
impl From<std::io::Error> for ProfileError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError {
            reason: error.to_string(),
        }
    }
}

/// Convert from TOML parse errors
impl From<toml::de::Error> for ProfileError {
    fn from(error: toml::de::Error) -> Self {
        Self::InvalidConfig {
            details: error.to_string(),
        }
    }
}
