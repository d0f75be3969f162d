//! Span detection module
//!
//! Provides the producer seam consumed by the pipeline and the two
//! concrete implementations: a deterministic pattern matcher and a
//! probabilistic entity recognizer.

pub mod ner;
pub mod patterns;
pub mod rules;

use crate::deid::span::PhiSpan;
use crate::domain::Result;

/// Trait for candidate span producers
///
/// A producer is a pure function of the input text: it holds no per-call
/// state and may be invoked concurrently. Emitted spans must satisfy
/// `0 <= start < end <= text.len()`; the merger rejects violations.
pub trait SpanProducer: Send + Sync {
    /// Detect candidate PHI spans in the text
    fn find_spans(&self, text: &str) -> Result<Vec<PhiSpan>>;
}
