//! PHI label vocabulary
//!
//! The closed-ish set of categories a detected span can carry. Replacement
//! tokens are built from the `label()` string form, so the variants here
//! define the vocabulary visible in de-identified output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PHI category for a detected span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhiLabel {
    /// Personal names (patients, providers)
    Name,
    /// Calendar dates (birth, admission, visit)
    Date,
    /// Telephone numbers
    Phone,
    /// Email addresses
    Email,
    /// Medical record numbers
    Mrn,
    /// Government or payer identifiers (SSN and similar)
    Id,
    /// Geographic locations (cities, states)
    Location,
    /// Care facilities and provider organizations
    Hospital,
}

impl PhiLabel {
    /// String form used in replacement tokens, e.g. `[NAME]` / `[NAME_001]`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Date => "DATE",
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::Mrn => "MRN",
            Self::Id => "ID",
            Self::Location => "LOCATION",
            Self::Hospital => "HOSPITAL",
        }
    }

    /// Parse a category string from the pattern library
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NAME" | "PERSON" => Some(Self::Name),
            "DATE" => Some(Self::Date),
            "PHONE" => Some(Self::Phone),
            "EMAIL" => Some(Self::Email),
            "MRN" | "MEDICAL_RECORD_NUMBER" => Some(Self::Mrn),
            "ID" | "SSN" => Some(Self::Id),
            "LOCATION" | "GPE" | "LOC" => Some(Self::Location),
            "HOSPITAL" | "ORG" => Some(Self::Hospital),
            _ => None,
        }
    }
}

impl fmt::Display for PhiLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
