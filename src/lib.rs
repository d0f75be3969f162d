//! # Scrub - Clinical Text De-identification
//!
//! Scrub locates sensitive spans of text (names, dates, contact
//! identifiers, record numbers) with two independent detectors — a
//! deterministic pattern matcher and an entity recognizer — and produces a
//! single de-identified rendering by replacing each resolved span with a
//! label or a numbered surrogate token.
//!
//! ## Architecture
//!
//! Scrub follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`deid`] - The core engine: span model, merger, renderer, pipeline
//! - [`detectors`] - Span producers (rule-based and model-based)
//! - [`domain`] - PHI label vocabulary and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrub::deid::{DeidPipeline, Strategy};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = DeidPipeline::with_defaults()?;
//!
//!     let result = pipeline.deidentify(
//!         "Call (555) 123-4567 to reach Dr. Doe.",
//!         Strategy::Mask,
//!     )?;
//!
//!     println!("{}", result.deidentified_text);
//!     for span in &result.spans {
//!         println!("[{}] at {}:{}", span.label, span.start, span.end);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Span Resolution
//!
//! Candidates from both producers are merged under a fixed precedence
//! policy: rule-based spans are never displaced by model spans, and model
//! spans compete with each other by extent. The resolved sequence is
//! non-overlapping, sorted, and refers to offsets in the *original* text.
//!
//! ## Error Handling
//!
//! Scrub uses the [`domain::ScrubError`] type for all errors:
//!
//! ```rust,no_run
//! use scrub::domain::ScrubError;
//!
//! fn example() -> Result<(), ScrubError> {
//!     let config = scrub::config::load_config("scrub.toml")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod deid;
pub mod detectors;
pub mod domain;
pub mod logging;
