//! # Participant Record
//!
//! One row per person (or entity) involved in the company being
//! registered. Fields may be partially filled while the add/edit form is
//! open; legal completeness is the validator's concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use imali_core::{
    DocKind, FileRef, IdentityDocument, MaritalStatus, PersonId, Role, SignatureCapture,
};

/// A person's name as carried on the registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub last: String,
    pub first: String,
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.last, self.first)
    }
}

/// End bound of a participant's validity period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidityEnd {
    /// Ongoing relationship with no end date.
    #[serde(rename = "OPEN")]
    Open,
    /// Relationship ends on the given date.
    #[serde(untagged)]
    On(NaiveDate),
}

/// The period during which the participant holds the declared role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    pub start: NaiveDate,
    pub end: ValidityEnd,
}

/// One participant in the registration draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// External person reference; absent until the person service has
    /// materialized the record. Drives persistence idempotency.
    #[serde(default)]
    pub person_id: Option<PersonId>,
    pub name: PersonName,
    pub birth_date: NaiveDate,
    pub birth_place: String,
    pub nationality: String,
    pub role: Role,
    /// Equity percentage in `[0, 100]`.
    pub share_percentage: f64,
    pub validity: ValidityPeriod,
    /// Identity document triplet, mandatory for every participant.
    #[serde(default)]
    pub identity: IdentityDocument,
    /// User-selected for plain associates; derived from the filer's
    /// company-level disclosure for manager-grade participants.
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub criminal_record: Option<FileRef>,
    #[serde(default)]
    pub honor_declaration: Option<FileRef>,
    #[serde(default)]
    pub honor_signature: Option<SignatureCapture>,
    #[serde(default)]
    pub marriage_certificate: Option<FileRef>,
    #[serde(default)]
    pub birth_certificate: Option<FileRef>,
}

impl Participant {
    /// Whether the participant is persisted in the backend.
    pub fn is_persisted(&self) -> bool {
        self.person_id.is_some()
    }

    /// Whether the participant is at least 18 years old on `today`,
    /// with calendar-correct day/month comparison. A participant born on
    /// February 29 comes of age on March 1 in non-leap years, which is
    /// what `years_since` computes.
    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        match today.years_since(self.birth_date) {
            Some(years) => years >= 18,
            // Birth date in the future.
            None => false,
        }
    }

    /// Whether a document of the given kind is present on this record.
    pub fn has_document(&self, kind: DocKind) -> bool {
        match kind {
            DocKind::Identity => self.identity.is_complete(),
            DocKind::BirthCertificate => self.birth_certificate.is_some(),
            DocKind::CriminalRecord => self.criminal_record.is_some(),
            DocKind::HonorDeclaration => self.honor_declaration.is_some(),
            DocKind::HonorSignature => self.honor_signature.is_some(),
            DocKind::MarriageCertificate => self.marriage_certificate.is_some(),
        }
    }
}
