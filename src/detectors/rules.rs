//! Rule-based span detector
//!
//! Deterministic pattern matching over the input text. Every match of
//! every registered pattern is emitted as a candidate span; overlaps
//! between patterns (a 10-digit phone number also matching the MRN digit
//! run, say) are left to the merger to resolve.

use crate::deid::span::PhiSpan;
use crate::detectors::patterns::PatternRegistry;
use crate::detectors::SpanProducer;
use crate::domain::Result;
use std::path::Path;
use std::sync::Arc;

/// Regex-based span producer
pub struct RuleDetector {
    registry: Arc<PatternRegistry>,
}

impl RuleDetector {
    /// Create a rule detector with the embedded default pattern library
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: Arc::new(PatternRegistry::default_patterns()?),
        })
    }

    /// Create a rule detector from a pattern library file
    pub fn from_pattern_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            registry: Arc::new(PatternRegistry::from_file(path)?),
        })
    }

    /// Create a rule detector with a custom registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl SpanProducer for RuleDetector {
    fn find_spans(&self, text: &str) -> Result<Vec<PhiSpan>> {
        let mut spans = Vec::new();

        for pattern in self.registry.all_patterns() {
            for m in pattern.regex.find_iter(text) {
                spans.push(PhiSpan::new(m.start(), m.end(), pattern.label));
            }
        }

        tracing::debug!(count = spans.len(), "Rule-based detection completed");
        Ok(spans)
    }
}
