//! Domain error types
//!
//! This module defines the error hierarchy for Scrub. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Scrub error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A producer emitted a malformed span
    ///
    /// Raised when a candidate span violates `0 <= start < end <= text_len`.
    /// A malformed span indicates a producer bug, so the merge is aborted
    /// rather than the span silently skipped.
    #[error("Invalid span [{start}, {end}) for text of length {text_len}")]
    InvalidSpan {
        start: usize,
        end: usize,
        text_len: usize,
    },

    /// Unrecognized rewrite strategy token
    #[error("Unsupported strategy '{0}'. Must be one of: mask, surrogate")]
    UnsupportedStrategy(String),

    /// Span detection errors
    #[error("Detection error: {0}")]
    Detection(String),

    /// Pattern library errors
    #[error("Pattern library error: {0}")]
    Pattern(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ScrubError {
    fn from(err: std::io::Error) -> Self {
        ScrubError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        ScrubError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ScrubError {
    fn from(err: toml::de::Error) -> Self {
        ScrubError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_error_display() {
        let err = ScrubError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_invalid_span_display() {
        let err = ScrubError::InvalidSpan {
            start: 9,
            end: 4,
            text_len: 20,
        };
        assert_eq!(err.to_string(), "Invalid span [9, 4) for text of length 20");
    }

    #[test]
    fn test_unsupported_strategy_display() {
        let err = ScrubError::UnsupportedStrategy("redact".to_string());
        assert!(err.to_string().contains("redact"));
        assert!(err.to_string().contains("mask, surrogate"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let scrub_err: ScrubError = io_err.into();
        assert!(matches!(scrub_err, ScrubError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let scrub_err: ScrubError = json_err.into();
        assert!(matches!(scrub_err, ScrubError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let scrub_err: ScrubError = toml_err.into();
        assert!(matches!(scrub_err, ScrubError::Configuration(_)));
        assert!(scrub_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_scrub_error_implements_std_error() {
        let err = ScrubError::Detection("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
