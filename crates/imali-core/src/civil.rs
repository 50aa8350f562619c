//! # Civil-Status Enums
//!
//! Marital status, civility, and sex as the person service expects them.
//! These cross the wire in `create_person` payloads, so the serde names
//! match the backend's French constants exactly.

use serde::{Deserialize, Serialize};

/// Marital status of a participant.
///
/// For non-manager-grade participants this is chosen on the form. For
/// manager-grade participants it is **derived** from the filer's
/// company-level `is_married` disclosure and never user-selected; see
/// the rules crate for the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "CELIBATAIRE")]
    Single,
    #[serde(rename = "MARIE")]
    Married,
    #[serde(rename = "DIVORCE")]
    Divorced,
    #[serde(rename = "VEUF")]
    Widowed,
}

/// Civility honorific used in person payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Civility {
    #[serde(rename = "MONSIEUR")]
    Mr,
    #[serde(rename = "MADAME")]
    Mrs,
    #[serde(rename = "MADEMOISELLE")]
    Miss,
}

/// Sex as recorded on the identity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "MASCULIN")]
    Male,
    #[serde(rename = "FEMININ")]
    Female,
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Single => "CELIBATAIRE",
            Self::Married => "MARIE",
            Self::Divorced => "DIVORCE",
            Self::Widowed => "VEUF",
        };
        f.write_str(s)
    }
}
