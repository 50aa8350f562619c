//! # Person-Persistence Saga
//!
//! Persists newly-added participants to the external person service when
//! a draft is accepted. Calls are strictly sequential and awaited in
//! registry order, so a failure on participant *k* leaves *1..k−1*
//! already persisted. That partial state is tolerated by design: each
//! success is recorded on the participant immediately, and a retry skips
//! anything that already carries a `person_id`.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use imali_core::{CompanyFlags, Civility, EnterpriseKind, MaritalStatus, PersonId, Sex};
use imali_registry::{Participant, ParticipantRegistry, RegistryError};
use imali_rules::derived_marital_status;

/// Error from the external person service.
#[derive(Error, Debug, Clone)]
pub enum PersonServiceError {
    /// The service refused the payload.
    #[error("person service rejected the payload: {0}")]
    Rejected(String),
    /// The service could not be reached.
    #[error("person service unreachable: {0}")]
    Unavailable(String),
}

/// Error from one saga run.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Creation failed for the named participant. Everything persisted
    /// before it keeps its `person_id` and is skipped on retry.
    #[error(
        "failed to persist participant {participant}: {source}; \
         {persisted} participant(s) were persisted before the failure and will be skipped on retry"
    )]
    CreationFailed {
        /// Display name of the failing participant.
        participant: String,
        /// How many participants this run persisted before failing.
        persisted: usize,
        /// The underlying service error.
        source: PersonServiceError,
    },

    /// The registry rejected a key mid-saga.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// External collaborator that materializes person records.
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    /// Create one person record, returning its backend identifier.
    async fn create_person(&self, draft: &PersonDraft) -> Result<PersonId, PersonServiceError>;
}

/// Payload for one `create_person` call.
///
/// Absent values serialize as explicit `null`, never as omitted keys —
/// the person service distinguishes the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDraft {
    pub last_name: String,
    pub first_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub nationality: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub civility: Option<Civility>,
    pub sex: Option<Sex>,
    pub division_code: Option<String>,
}

impl PersonDraft {
    /// Shape a payload from a participant record.
    ///
    /// Contact, civility, sex and division are unknown for participants
    /// entered by hand on the form; they go out as `null`. Manager-grade
    /// marital status is derived from the filer's disclosure.
    pub fn for_participant(
        participant: &Participant,
        kind: EnterpriseKind,
        flags: &CompanyFlags,
    ) -> Self {
        Self {
            last_name: participant.name.last.clone(),
            first_name: participant.name.first.clone(),
            email: None,
            phone: None,
            birth_date: Some(participant.birth_date),
            birth_place: Some(participant.birth_place.clone()),
            nationality: Some(participant.nationality.clone()),
            marital_status: derived_marital_status(
                participant.role,
                kind,
                flags,
                participant.marital_status,
            ),
            civility: None,
            sex: None,
            division_code: None,
        }
    }
}

/// Persist every participant that does not yet carry a `person_id`,
/// sequentially and in registry order. Returns how many were persisted
/// in this run.
///
/// Idempotent across retries: participants persisted by an earlier run
/// (or synthesized from an already-persisted account) are skipped.
pub async fn persist_new_associates(
    registry: &mut ParticipantRegistry,
    kind: EnterpriseKind,
    flags: &CompanyFlags,
    directory: &dyn PersonDirectory,
) -> Result<usize, PersistenceError> {
    let pending: Vec<_> = registry
        .iter()
        .filter(|(_, p)| !p.is_persisted())
        .map(|(key, p)| {
            (
                key,
                p.name.to_string(),
                PersonDraft::for_participant(p, kind, flags),
            )
        })
        .collect();

    let mut persisted = 0usize;
    for (key, name, draft) in pending {
        tracing::info!(participant = %name, "persisting participant to person service");
        match directory.create_person(&draft).await {
            Ok(person_id) => {
                registry.mark_persisted(key, person_id)?;
                persisted += 1;
            }
            Err(source) => {
                tracing::warn!(
                    participant = %name,
                    persisted,
                    error = %source,
                    "person creation failed; saga stopped"
                );
                return Err(PersistenceError::CreationFailed {
                    participant: name,
                    persisted,
                    source,
                });
            }
        }
    }

    Ok(persisted)
}
