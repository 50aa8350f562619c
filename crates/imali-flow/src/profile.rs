//! # Filer Profile
//!
//! The authenticated account's data, as supplied by the `currentUser`
//! collaborator. The flow receives this explicitly — nothing in the
//! workspace reads global session state — and uses it to synthesize the
//! first participant when the filer declares their own role.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use imali_core::{
    AccountId, CompanyFlags, Civility, EnterpriseKind, IdentityDocument, MaritalStatus, PersonId,
    Role, Sex,
};
use imali_registry::{Participant, PersonName, ValidityEnd, ValidityPeriod};
use imali_rules::derived_marital_status;

/// Profile of the filer, shaped from the `currentUser` collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilerProfile {
    pub account_id: AccountId,
    /// Present when the account is already backed by a person record.
    #[serde(default)]
    pub person_id: Option<PersonId>,
    pub name: PersonName,
    pub birth_date: NaiveDate,
    pub birth_place: String,
    pub nationality: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub civility: Option<Civility>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    /// Administrative division reference (region/circle/commune code).
    #[serde(default)]
    pub division_code: Option<String>,
}

impl FilerProfile {
    /// Synthesize the first participant of the draft from this profile.
    ///
    /// Identity and conditional documents start empty; the flow
    /// immediately re-opens the edit form so they can be completed.
    /// Manager-grade marital status is derived from the filer's
    /// company-level disclosure, never taken from the profile selection.
    pub fn to_participant(
        &self,
        role: Role,
        kind: EnterpriseKind,
        flags: &CompanyFlags,
        share_percentage: f64,
        today: NaiveDate,
    ) -> Participant {
        Participant {
            person_id: self.person_id.clone(),
            name: self.name.clone(),
            birth_date: self.birth_date,
            birth_place: self.birth_place.clone(),
            nationality: self.nationality.clone(),
            role,
            share_percentage,
            validity: ValidityPeriod {
                start: today,
                end: ValidityEnd::Open,
            },
            identity: IdentityDocument::default(),
            marital_status: derived_marital_status(role, kind, flags, self.marital_status),
            criminal_record: None,
            honor_declaration: None,
            honor_signature: None,
            marriage_certificate: None,
            birth_certificate: None,
        }
    }
}
