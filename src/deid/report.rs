//! Detection reporting
//!
//! Formatted summaries of a de-identification run for console and JSON
//! output. Reports are derived from a [`DeidResult`] and live only as long
//! as the caller keeps them; nothing is persisted.

use crate::deid::pipeline::DeidResult;
use crate::domain::PhiLabel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One detected span as presented to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanDetail {
    /// PHI category
    pub label: PhiLabel,
    /// Start offset in the original text
    pub start: usize,
    /// End offset in the original text
    pub end: usize,
    /// The covered text, truncated for display
    pub excerpt: String,
}

/// Summary of one de-identification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Total spans resolved
    pub total_detections: usize,
    /// Detections by category
    pub detections_by_label: HashMap<PhiLabel, usize>,
    /// Per-span details in document order
    pub spans: Vec<SpanDetail>,
}

impl DetectionReport {
    /// Build a report from a pipeline result
    pub fn from_result(result: &DeidResult) -> Self {
        let mut detections_by_label: HashMap<PhiLabel, usize> = HashMap::new();
        let mut spans = Vec::with_capacity(result.spans.len());

        for span in &result.spans {
            *detections_by_label.entry(span.label).or_insert(0) += 1;

            let covered = span.text_slice(&result.original_text);
            let excerpt = if covered.len() > 50 {
                format!("{}...", &covered[..47])
            } else {
                covered.to_string()
            };

            spans.push(SpanDetail {
                label: span.label,
                start: span.start,
                end: span.end,
                excerpt,
            });
        }

        Self {
            total_detections: result.spans.len(),
            detections_by_label,
            spans,
        }
    }

    /// Format the report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("--------------------\n");
        output.push_str("DETECTED SPANS:\n");
        output.push_str("--------------------\n");

        if self.spans.is_empty() {
            output.push_str("  (none)\n");
            return output;
        }

        for detail in &self.spans {
            output.push_str(&format!(
                "[{}] at {}:{} -> '{}'\n",
                detail.label, detail.start, detail.end, detail.excerpt
            ));
        }

        output.push('\n');
        let mut labels: Vec<_> = self.detections_by_label.iter().collect();
        labels.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.label().cmp(b.0.label())));
        for (label, count) in labels {
            output.push_str(&format!("  {:10} {:>4}\n", label.label(), count));
        }

        output
    }

    /// Format the report as pretty-printed JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
