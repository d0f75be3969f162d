//! Pattern library for rule-based detection
//!
//! Patterns are defined in TOML, keyed by name, each carrying one or more
//! regexes and the PHI label matches are tagged with. A default library
//! covering dates, phone numbers, emails, record numbers and SSNs is
//! embedded in the binary; deployments can substitute their own file.

use crate::domain::{PhiLabel, Result, ScrubError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this entry
    pub patterns: Vec<String>,
    /// PHI category label
    pub label: String,
}

/// Compiled pattern with its label
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PHI category
    pub label: PhiLabel,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Compiled pattern registry
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
    patterns_by_label: HashMap<PhiLabel, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScrubError::Pattern(format!(
                "Failed to read pattern library {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| ScrubError::Pattern(format!("Failed to parse pattern library: {e}")))?;

        let mut patterns = Vec::new();
        let mut patterns_by_label: HashMap<PhiLabel, Vec<CompiledPattern>> = HashMap::new();

        for (name, def) in library.patterns {
            let label = PhiLabel::parse(&def.label).ok_or_else(|| {
                ScrubError::Pattern(format!(
                    "Unknown label in pattern '{}': {}",
                    name, def.label
                ))
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    ScrubError::Pattern(format!(
                        "Invalid regex in pattern '{name}': {pattern_str}: {e}"
                    ))
                })?;

                let compiled = CompiledPattern { regex, label };

                patterns.push(compiled.clone());
                patterns_by_label.entry(label).or_default().push(compiled);
            }
        }

        Ok(Self {
            patterns,
            patterns_by_label,
        })
    }

    /// Create the default registry with the embedded pattern library
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../patterns/phi_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all patterns
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific label
    pub fn patterns_for_label(&self, label: PhiLabel) -> Option<&[CompiledPattern]> {
        self.patterns_by_label.get(&label).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_patterns() {
        let registry = PatternRegistry::default_patterns().unwrap();
        assert!(!registry.all_patterns().is_empty());
    }

    #[test]
    fn test_email_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let email_patterns = registry.patterns_for_label(PhiLabel::Email).unwrap();
        assert!(!email_patterns.is_empty());

        let pattern = &email_patterns[0];
        assert!(pattern.regex.is_match("test@example.com"));
        assert!(!pattern.regex.is_match("not-an-email"));
    }

    #[test]
    fn test_phone_pattern() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let phone_patterns = registry.patterns_for_label(PhiLabel::Phone).unwrap();
        assert!(!phone_patterns.is_empty());

        let text = "Call me at (555) 123-4567";
        let has_match = phone_patterns.iter().any(|p| p.regex.is_match(text));
        assert!(has_match);
    }

    #[test]
    fn test_date_pattern_both_forms() {
        let registry = PatternRegistry::default_patterns().unwrap();
        let date_patterns = registry.patterns_for_label(PhiLabel::Date).unwrap();

        for text in ["03/12/2024", "2024-03-12", "5-14-80"] {
            assert!(
                date_patterns.iter().any(|p| p.regex.is_match(text)),
                "expected a date match for {text}"
            );
        }
    }

    #[test]
    fn test_custom_toml() {
        let toml = r#"
[patterns.room]
patterns = ['\bRoom \d+\b']
label = "LOCATION"
"#;
        let registry = PatternRegistry::from_toml(toml).unwrap();
        assert_eq!(registry.all_patterns().len(), 1);
        assert!(registry.patterns_for_label(PhiLabel::Location).is_some());
    }

    #[test]
    fn test_unknown_label_rejected() {
        let toml = r#"
[patterns.bad]
patterns = ['x']
label = "FAX"
"#;
        let err = PatternRegistry::from_toml(toml).unwrap_err();
        assert!(matches!(err, ScrubError::Pattern(_)));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
[patterns.bad]
patterns = ['(unclosed']
label = "DATE"
"#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(PatternRegistry::from_file("no/such/patterns.toml").is_err());
    }
}
