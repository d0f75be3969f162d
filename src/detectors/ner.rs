//! Model-based span detector
//!
//! Wraps an entity-recognizer backend behind the [`EntityRecognizer`]
//! trait and translates its native categories (PERSON, ORG, GPE, ...)
//! into the shared PHI vocabulary before spans reach the merger. Entities
//! whose category has no mapping are dropped.
//!
//! The default backend is a lexicon-and-heuristic recognizer: honorifics
//! and a first-name gazetteer seed PERSON entities, facility keywords seed
//! ORG, and a place gazetteer seeds GPE. Backends that overlap themselves
//! (an honorific match and a gazetteer match over the same name) are fine:
//! model-vs-model overlap is resolved by the merger.

use crate::config::NerConfig;
use crate::deid::span::PhiSpan;
use crate::detectors::SpanProducer;
use crate::domain::{PhiLabel, Result, ScrubError};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// An entity in the recognizer's native taxonomy
#[derive(Debug, Clone)]
pub struct NamedEntity {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
    /// Native category name (PERSON, ORG, GPE, ...)
    pub category: String,
}

/// Trait for entity recognizer backends
///
/// A backend is constructed once (loading happens here, outside the
/// per-call path) and then queried per text. Implementations must be pure
/// functions of the input text.
pub trait EntityRecognizer: Send + Sync {
    /// Backend name for diagnostics
    fn name(&self) -> &str;

    /// Recognize entities in their native taxonomy
    fn recognize(&self, text: &str) -> Vec<NamedEntity>;
}

/// Model-based span producer
pub struct NerDetector {
    recognizer: Arc<dyn EntityRecognizer>,
    label_map: HashMap<String, PhiLabel>,
}

impl std::fmt::Debug for NerDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NerDetector")
            .field("recognizer", &self.recognizer.name())
            .field("label_map", &self.label_map)
            .finish()
    }
}

impl NerDetector {
    /// Create a detector with the default lexicon backend
    pub fn new() -> Self {
        Self::with_recognizer(Arc::new(LexiconRecognizer::new()))
    }

    /// Create a detector wrapping a custom backend
    pub fn with_recognizer(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            recognizer,
            label_map: Self::default_label_map(),
        }
    }

    /// Create a detector from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown backend name.
    pub fn from_config(config: &NerConfig) -> Result<Self> {
        match config.backend.as_str() {
            "lexicon" => Ok(Self::new()),
            other => Err(ScrubError::Configuration(format!(
                "Unknown NER backend '{other}'. Must be one of: lexicon"
            ))),
        }
    }

    /// Native category to PHI label mapping
    fn default_label_map() -> HashMap<String, PhiLabel> {
        HashMap::from([
            ("PERSON".to_string(), PhiLabel::Name),
            ("ORG".to_string(), PhiLabel::Hospital),
            ("GPE".to_string(), PhiLabel::Location),
            ("LOC".to_string(), PhiLabel::Location),
        ])
    }
}

impl Default for NerDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanProducer for NerDetector {
    fn find_spans(&self, text: &str) -> Result<Vec<PhiSpan>> {
        let entities = self.recognizer.recognize(text);

        let spans: Vec<PhiSpan> = entities
            .iter()
            .filter_map(|ent| {
                self.label_map
                    .get(&ent.category)
                    .map(|label| PhiSpan::new(ent.start, ent.end, *label))
            })
            .collect();

        tracing::debug!(
            backend = self.recognizer.name(),
            entities = entities.len(),
            mapped = spans.len(),
            "Model-based detection completed"
        );
        Ok(spans)
    }
}

/// Lexicon-and-heuristic entity recognizer
///
/// Deliberately lightweight: a gazetteer of common first names and places
/// plus honorific and facility-keyword patterns. It trades recall for a
/// dependency-free default backend that behaves like a model producer.
pub struct LexiconRecognizer {
    honorific_re: Regex,
    facility_re: Regex,
    capitalized_re: Regex,
    first_names: HashSet<&'static str>,
    places: HashSet<&'static str>,
}

const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Paul", "Kevin",
    "Brian", "George", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley",
    "Dorothy", "Emily", "Michelle", "Jane", "Laura", "Grace", "Rachel", "Catherine", "Maria",
];

const PLACES: &[&str] = &[
    "Boston", "Chicago", "Houston", "Phoenix", "Philadelphia", "Dallas", "Austin", "Denver",
    "Seattle", "Portland", "Atlanta", "Miami", "Baltimore", "Cleveland", "Detroit", "Memphis",
    "Nashville", "Richmond", "Springfield", "New York", "Los Angeles", "San Francisco",
    "San Diego", "New Orleans", "Massachusetts", "California", "Texas", "Florida", "Virginia",
    "Ohio", "Illinois", "Georgia", "Washington", "Oregon", "Colorado", "Arizona", "Tennessee",
];

impl LexiconRecognizer {
    /// Create the recognizer, compiling its patterns
    pub fn new() -> Self {
        Self {
            // Capture the name following the honorific, not the honorific
            honorific_re: Regex::new(
                r"\b(?:Dr|Mr|Mrs|Ms|Prof)\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2})",
            )
            .expect("honorific pattern is valid"),
            facility_re: Regex::new(
                r"\b((?:[A-Z][A-Za-z]+\s+){0,3}(?:Hospital|Clinic|Medical Center|Health Center|Infirmary))\b",
            )
            .expect("facility pattern is valid"),
            capitalized_re: Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,2})\b")
                .expect("capitalized pattern is valid"),
            first_names: FIRST_NAMES.iter().copied().collect(),
            places: PLACES.iter().copied().collect(),
        }
    }
}

impl Default for LexiconRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn recognize(&self, text: &str) -> Vec<NamedEntity> {
        let mut entities = Vec::new();

        for caps in self.honorific_re.captures_iter(text) {
            if let Some(name) = caps.get(1) {
                entities.push(NamedEntity {
                    start: name.start(),
                    end: name.end(),
                    category: "PERSON".to_string(),
                });
            }
        }

        for caps in self.facility_re.captures_iter(text) {
            if let Some(facility) = caps.get(1) {
                entities.push(NamedEntity {
                    start: facility.start(),
                    end: facility.end(),
                    category: "ORG".to_string(),
                });
            }
        }

        for caps in self.capitalized_re.captures_iter(text) {
            let Some(run) = caps.get(1) else { continue };
            let matched = run.as_str();

            if self.places.contains(matched) {
                entities.push(NamedEntity {
                    start: run.start(),
                    end: run.end(),
                    category: "GPE".to_string(),
                });
            } else if let Some(first_word) = matched.split_whitespace().next() {
                if self.first_names.contains(first_word) {
                    entities.push(NamedEntity {
                        start: run.start(),
                        end: run.end(),
                        category: "PERSON".to_string(),
                    });
                }
            }
        }

        entities
    }
}
