//! De-identification pipeline
//!
//! This module provides the [`DeidPipeline`] that orchestrates the two span
//! producers, the merger, and the renderer behind the single entry point
//! presentation layers consume.
//!
//! # Architecture
//!
//! The pipeline coordinates three components:
//! - **Producers**: rule-based and model-based span detection behind the
//!   [`SpanProducer`] seam
//! - **Merger**: overlap resolution into one ordered sequence
//! - **Renderer**: strategy-driven text rewriting
//!
//! Producers are pure functions of the input text with no ordering
//! dependency between them; the merger requires both outputs before it
//! runs. The pipeline itself holds no per-call mutable state, so one
//! instance can serve any number of calls.
//!
//! # Examples
//!
//! ```no_run
//! use scrub::deid::{DeidPipeline, Strategy};
//!
//! # fn example() -> anyhow::Result<()> {
//! let pipeline = DeidPipeline::with_defaults()?;
//! let result = pipeline.deidentify("MRN: 1234567", Strategy::Mask)?;
//! println!("{}", result.deidentified_text);
//! # Ok(())
//! # }
//! ```

use crate::config::ScrubConfig;
use crate::deid::merger::merge_spans;
use crate::deid::renderer::{render, Strategy};
use crate::deid::span::PhiSpan;
use crate::detectors::ner::NerDetector;
use crate::detectors::rules::RuleDetector;
use crate::detectors::SpanProducer;
use crate::domain::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of one de-identification call
///
/// Span offsets always refer to `original_text`; the rewritten text has
/// different offsets once replacement tokens differ in length from the
/// spans they replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeidResult {
    /// The input text, unchanged
    pub original_text: String,
    /// The rewritten text with all resolved spans replaced
    pub deidentified_text: String,
    /// Resolved spans, non-overlapping and sorted ascending by start
    pub spans: Vec<PhiSpan>,
}

impl DeidResult {
    /// Total number of resolved spans
    pub fn total_detections(&self) -> usize {
        self.spans.len()
    }

    /// Check whether any PHI was detected
    pub fn has_detections(&self) -> bool {
        !self.spans.is_empty()
    }
}

/// Hybrid de-identification pipeline
///
/// Combines a deterministic pattern producer with a probabilistic entity
/// recognizer, merging their candidates under rule precedence.
pub struct DeidPipeline {
    rule_producer: Arc<dyn SpanProducer>,
    model_producer: Arc<dyn SpanProducer>,
}

impl DeidPipeline {
    /// Create a pipeline from explicit producers
    pub fn new(rule_producer: Arc<dyn SpanProducer>, model_producer: Arc<dyn SpanProducer>) -> Self {
        Self {
            rule_producer,
            model_producer,
        }
    }

    /// Create a pipeline with the built-in pattern library and the default
    /// entity recognizer backend
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            Arc::new(RuleDetector::new()?),
            Arc::new(NerDetector::new()),
        ))
    }

    /// Create a pipeline from configuration
    ///
    /// Builds the rule producer from the configured pattern library (or the
    /// embedded defaults) and the model producer from the configured
    /// recognizer backend. Construction is the place for any expensive
    /// loading; the per-call path stays pure and CPU-bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern library cannot be loaded or the
    /// recognizer backend is unknown.
    pub fn from_config(config: &ScrubConfig) -> Result<Self> {
        let rule_producer: Arc<dyn SpanProducer> =
            match config.deidentification.pattern_library.as_deref() {
                Some(path) => Arc::new(RuleDetector::from_pattern_file(path)?),
                None => Arc::new(RuleDetector::new()?),
            };

        let model_producer: Arc<dyn SpanProducer> =
            Arc::new(NerDetector::from_config(&config.ner)?);

        Ok(Self::new(rule_producer, model_producer))
    }

    /// Detect and resolve PHI spans without rewriting
    ///
    /// Runs both producers and merges their candidates. This is the
    /// detection half of [`deidentify`](Self::deidentify), exposed for
    /// dry-run reporting.
    pub fn detect(&self, text: &str) -> Result<Vec<PhiSpan>> {
        let rule_spans = self.rule_producer.find_spans(text)?;
        let model_spans = self.model_producer.find_spans(text)?;

        tracing::debug!(
            rule_spans = rule_spans.len(),
            model_spans = model_spans.len(),
            "Producers completed"
        );

        merge_spans(&rule_spans, &model_spans, text.len())
    }

    /// Execute the de-identification process on the input text
    ///
    /// # Errors
    ///
    /// Returns an error if a producer fails or emits a malformed span.
    /// Producer failures propagate unchanged; the pipeline never retries.
    pub fn deidentify(&self, text: &str, strategy: Strategy) -> Result<DeidResult> {
        tracing::info!(text_len = text.len(), %strategy, "De-identifying text");

        let spans = self.detect(text)?;
        let deidentified_text = render(text, &spans, strategy);

        Ok(DeidResult {
            original_text: text.to_string(),
            deidentified_text,
            spans,
        })
    }
}
