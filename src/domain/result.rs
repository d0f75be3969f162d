//! Result type alias for Scrub
//!
//! This module provides a convenient Result type alias that uses ScrubError
//! as the error type.

use super::errors::ScrubError;

/// Result type alias for Scrub operations
///
/// This is a convenience type alias that uses `ScrubError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use scrub::domain::result::Result;
/// use scrub::domain::errors::ScrubError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ScrubError::Detection("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ScrubError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(ScrubError::Detection("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
