//! Domain types for Scrub.
//!
//! This module contains the core domain vocabulary and error types shared
//! across the de-identification pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **PHI label vocabulary** ([`PhiLabel`])
//! - **Error types** ([`ScrubError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ScrubError>`]:
//!
//! ```rust
//! use scrub::domain::{Result, ScrubError};
//!
//! fn example(strategy: &str) -> Result<()> {
//!     if strategy != "mask" && strategy != "surrogate" {
//!         return Err(ScrubError::UnsupportedStrategy(strategy.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod label;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::ScrubError;
pub use label::PhiLabel;
pub use result::Result;
