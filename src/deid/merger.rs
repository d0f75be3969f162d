//! Span merger
//!
//! Resolves the union of rule-based and model-based candidate spans into a
//! single non-overlapping sequence, ordered ascending by start offset.
//!
//! # Precedence policy
//!
//! Rule-based detections are treated as high-precision ground truth:
//! deterministic patterns for dates, emails, phone numbers and record
//! numbers rarely false-positive, so a rule span is never displaced by a
//! model span, even a larger one. Model spans compete with each other by
//! extent: the span reaching further right wins, on the assumption that a
//! broader model span is the better boundary for the same entity.
//!
//! Overlaps are resolved pairwise during a single left-to-right sweep.
//! Three or more mutually overlapping candidates are therefore resolved
//! adjacently in sort order, not by a global optimum.

use crate::deid::span::{PhiSpan, SpanSource};
use crate::domain::Result;

/// A candidate span tagged with its producer, internal to the sweep
#[derive(Debug, Clone, Copy)]
struct Candidate {
    span: PhiSpan,
    source: SpanSource,
}

/// Merge rule-based and model-based candidate spans into a resolved sequence
///
/// Both input sequences may be empty and may contain duplicates; duplicates
/// are handled by the overlap logic rather than deduplicated up front. The
/// returned sequence is strictly non-overlapping, sorted ascending by
/// `start`, with producer sources stripped.
///
/// # Errors
///
/// Returns [`ScrubError::InvalidSpan`](crate::domain::ScrubError::InvalidSpan)
/// if any candidate violates `start < end <= text_len`. A malformed span is
/// a producer bug and aborts the merge instead of being silently skipped.
pub fn merge_spans(
    rule_spans: &[PhiSpan],
    model_spans: &[PhiSpan],
    text_len: usize,
) -> Result<Vec<PhiSpan>> {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(rule_spans.len() + model_spans.len());

    for span in rule_spans {
        span.validate(text_len)?;
        candidates.push(Candidate {
            span: *span,
            source: SpanSource::Rule,
        });
    }
    for span in model_spans {
        span.validate(text_len)?;
        candidates.push(Candidate {
            span: *span,
            source: SpanSource::Model,
        });
    }

    candidates.sort_by_key(|c| (c.span.start, c.span.end));

    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());

    for current in candidates {
        let Some(&last) = accepted.last() else {
            accepted.push(current);
            continue;
        };

        if current.span.start >= last.span.end {
            // No overlap
            accepted.push(current);
        } else if current.source == SpanSource::Rule && last.source != SpanSource::Rule {
            // Rule displaces a model span, regardless of extent
            overwrite_last(&mut accepted, current);
        } else if last.source == SpanSource::Rule {
            // Rule always wins once accepted
            continue;
        } else if current.span.end > last.span.end {
            // Both model-sourced: prefer the more expansive span
            overwrite_last(&mut accepted, current);
        }
    }

    tracing::debug!(
        candidates = rule_spans.len() + model_spans.len(),
        resolved = accepted.len(),
        "Merged candidate spans"
    );

    Ok(accepted.into_iter().map(|c| c.span).collect())
}

/// Replace the most recently accepted candidate
fn overwrite_last(accepted: &mut [Candidate], current: Candidate) {
    if let Some(slot) = accepted.last_mut() {
        *slot = current;
    }
}
