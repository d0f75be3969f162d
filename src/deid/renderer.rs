//! Text renderer
//!
//! Walks a resolved span sequence left to right and rebuilds the text,
//! substituting each covered span with a replacement token chosen by the
//! active rewrite strategy. Text outside the spans is copied through
//! byte-for-byte, in original order.

use crate::deid::span::PhiSpan;
use crate::domain::{PhiLabel, ScrubError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Rewrite strategy for resolved spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Replace every span with the fixed token `[LABEL]`
    #[default]
    Mask,
    /// Replace every span with `[LABEL_NNN]`, numbered per label in
    /// left-to-right order, counters starting at 1 per render call
    Surrogate,
}

impl FromStr for Strategy {
    type Err = ScrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mask" => Ok(Self::Mask),
            "surrogate" => Ok(Self::Surrogate),
            other => Err(ScrubError::UnsupportedStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mask => write!(f, "mask"),
            Self::Surrogate => write!(f, "surrogate"),
        }
    }
}

/// Rewrite `text` against a resolved span sequence
///
/// Precondition: `spans` is non-overlapping, as produced by
/// [`merge_spans`](crate::deid::merger::merge_spans). The sequence is
/// re-sorted by start offset before walking, so callers holding spans in a
/// different order still get a consistent rendering; overlapping input is
/// undefined behavior at this layer.
///
/// An empty sequence returns the input unchanged.
pub fn render(text: &str, spans: &[PhiSpan], strategy: Strategy) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let mut sorted: Vec<PhiSpan> = spans.to_vec();
    sorted.sort_by_key(|s| s.start);

    // Surrogate counters are scoped to this call and discarded on return,
    // keeping render calls independent and reproducible.
    let mut counters: HashMap<PhiLabel, usize> = HashMap::new();
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0usize;

    for span in &sorted {
        if span.start > cursor {
            output.push_str(&text[cursor..span.start]);
        }

        match strategy {
            Strategy::Mask => {
                output.push_str(&format!("[{}]", span.label));
            }
            Strategy::Surrogate => {
                let counter = counters.entry(span.label).or_insert(0);
                *counter += 1;
                output.push_str(&format!("[{}_{:03}]", span.label, *counter));
            }
        }

        cursor = span.end;
    }

    if cursor < text.len() {
        output.push_str(&text[cursor..]);
    }

    output
}
