//! # Participant-Entry State Machine
//!
//! ```text
//! NoRoleDeclared ──▶ AddingParticipant ⇄ ReviewingList ──▶ Validating
//!                                              ▲                │
//!                                              │        ┌───────┴───────┐
//!                                              └─ Blocked(violations)   Accepted
//! ```
//!
//! Modeled as an enum with validated transitions. Invalid transitions
//! are rejected at runtime with structured errors naming the current
//! state and the attempted target; the validating step is not a resting
//! state, so it does not appear in the enum — `submit` runs it to
//! completion and lands on `Blocked` or `Accepted`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use imali_core::{CompanyFlags, EnterpriseKind, ParticipantKey, Role};
use imali_registry::{Participant, ParticipantRegistry, RegistryError};
use imali_validate::{validate, Violation};

use crate::persist::{persist_new_associates, PersistenceError, PersonDirectory};
use crate::profile::FilerProfile;

/// Resting states of the participant-entry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    /// The registry is empty; the filer has not declared their own role.
    NoRoleDeclared,
    /// The add/edit form is open.
    AddingParticipant,
    /// The filer is looking at the participant list.
    ReviewingList,
    /// Validation ran and failed; the violation list is surfaced.
    Blocked,
    /// Validation passed and all participants are persisted (terminal).
    Accepted,
}

impl FlowState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoRoleDeclared => "NO_ROLE_DECLARED",
            Self::AddingParticipant => "ADDING_PARTICIPANT",
            Self::ReviewingList => "REVIEWING_LIST",
            Self::Blocked => "BLOCKED",
            Self::Accepted => "ACCEPTED",
        };
        f.write_str(s)
    }
}

/// Errors from flow operations.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The operation is not valid from the current state.
    #[error("invalid flow transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: FlowState,
        /// Attempted target state.
        to: &'static str,
    },

    /// The declared role is not available for this enterprise kind.
    #[error("role {role} is not available for a {kind} registration")]
    RoleNotAvailable {
        /// The role the filer tried to declare.
        role: Role,
        /// The enterprise kind being registered.
        kind: EnterpriseKind,
    },

    /// The form commit is missing required fields.
    #[error("required fields are missing: {fields:?}")]
    MissingFields {
        /// Names of the empty fields.
        fields: Vec<&'static str>,
    },

    /// Validation produced violations; see [`EntryFlow::violations`].
    #[error("registration is blocked by {count} eligibility violation(s)")]
    ValidationBlocked {
        /// Number of violations surfaced.
        count: usize,
    },

    /// A registry operation rejected the key.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The persistence saga failed; the flow returned to reviewing.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// The participant-entry flow for one registration draft.
///
/// Owns the registry for the lifetime of the draft and gates every
/// mutation on the current state. All collaborators (the filer profile,
/// the person directory, the validation date) are passed in explicitly.
#[derive(Debug)]
pub struct EntryFlow {
    kind: EnterpriseKind,
    flags: CompanyFlags,
    registry: ParticipantRegistry,
    state: FlowState,
    /// Key under edit while the form is open; `None` for a fresh add.
    editing: Option<ParticipantKey>,
    /// Set while the synthesized first entry has never been committed;
    /// cancelling then rolls the declaration back entirely.
    first_entry_uncommitted: bool,
    /// Violations from the most recent validation run.
    violations: Vec<Violation>,
}

impl EntryFlow {
    /// Start a flow for a fresh draft.
    pub fn new(kind: EnterpriseKind, flags: CompanyFlags) -> Self {
        Self {
            kind,
            flags,
            registry: ParticipantRegistry::new(),
            state: FlowState::NoRoleDeclared,
            editing: None,
            first_entry_uncommitted: false,
            violations: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The registry as built so far.
    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    /// Violations from the most recent validation run.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The key currently under edit, while the form is open.
    pub fn editing(&self) -> Option<ParticipantKey> {
        self.editing
    }

    /// Declare the filer's own role, synthesizing the first participant
    /// from the account profile and opening the edit form on it so the
    /// identity and document fields can be completed.
    ///
    /// For a sole proprietorship the role must be the executive role and
    /// the share is forced to 100; for a company the filer chooses any
    /// role and starts at 0%.
    pub fn declare_filer_role(
        &mut self,
        profile: &FilerProfile,
        role: Role,
        today: NaiveDate,
    ) -> Result<ParticipantKey, FlowError> {
        self.require_state(FlowState::NoRoleDeclared, "ADDING_PARTICIPANT")?;

        let share = match self.kind {
            EnterpriseKind::Individual => {
                if role != Role::Executive {
                    return Err(FlowError::RoleNotAvailable {
                        role,
                        kind: self.kind,
                    });
                }
                100.0
            }
            EnterpriseKind::Company => 0.0,
        };

        let participant = profile.to_participant(role, self.kind, &self.flags, share, today);
        let key = self.registry.add(participant);
        self.editing = Some(key);
        self.first_entry_uncommitted = true;
        self.transition(FlowState::AddingParticipant);
        Ok(key)
    }

    /// Open the form for a brand-new participant.
    pub fn begin_add(&mut self) -> Result<(), FlowError> {
        self.require_reviewing("ADDING_PARTICIPANT")?;
        self.editing = None;
        self.transition(FlowState::AddingParticipant);
        Ok(())
    }

    /// Open the form on an existing participant.
    pub fn begin_edit(&mut self, key: ParticipantKey) -> Result<(), FlowError> {
        self.require_reviewing("ADDING_PARTICIPANT")?;
        if self.registry.get(key).is_none() {
            return Err(FlowError::Registry(RegistryError::UnknownKey(key)));
        }
        self.editing = Some(key);
        self.transition(FlowState::AddingParticipant);
        Ok(())
    }

    /// Commit the open form to the registry.
    ///
    /// Only required-field presence is checked here; the flow stays on
    /// the form when fields are missing. Legal validation happens in
    /// [`submit`](Self::submit).
    pub fn commit_participant(
        &mut self,
        participant: Participant,
    ) -> Result<ParticipantKey, FlowError> {
        self.require_state(FlowState::AddingParticipant, "REVIEWING_LIST")?;

        let missing = missing_required_fields(&participant);
        if !missing.is_empty() {
            return Err(FlowError::MissingFields { fields: missing });
        }

        let key = match self.editing.take() {
            Some(key) => {
                // An edit never discards a person id the backend already
                // assigned, even if the form resubmits without one.
                self.registry.update(key, |existing| {
                    let persisted = existing.person_id.take();
                    *existing = participant;
                    if existing.person_id.is_none() {
                        existing.person_id = persisted;
                    }
                })?;
                key
            }
            None => self.registry.add(participant),
        };

        self.first_entry_uncommitted = false;
        self.transition(FlowState::ReviewingList);
        Ok(key)
    }

    /// Close the form without committing.
    ///
    /// Abandoning the synthesized first entry before it was ever
    /// committed rolls the role declaration back entirely; any other
    /// cancel just returns to the list.
    pub fn cancel_entry(&mut self) -> Result<(), FlowError> {
        self.require_state(FlowState::AddingParticipant, "REVIEWING_LIST")?;

        let editing = self.editing.take();
        if self.first_entry_uncommitted {
            if let Some(key) = editing {
                self.registry.remove(key)?;
            }
            self.first_entry_uncommitted = false;
            self.transition(FlowState::NoRoleDeclared);
            return Ok(());
        }
        self.transition(FlowState::ReviewingList);
        Ok(())
    }

    /// Remove a participant from the list.
    pub fn remove_participant(&mut self, key: ParticipantKey) -> Result<Participant, FlowError> {
        self.require_reviewing("REVIEWING_LIST")?;
        let removed = self.registry.remove(key)?;
        if self.registry.is_empty() {
            self.transition(FlowState::NoRoleDeclared);
        }
        Ok(removed)
    }

    /// Run full validation and, on success, the persistence saga.
    ///
    /// Violations leave the flow in `Blocked` with the list surfaced via
    /// [`violations`](Self::violations). A saga failure returns the flow
    /// to `ReviewingList`; retrying is safe because persisted
    /// participants are skipped. Zero violations and a clean saga land
    /// on the terminal `Accepted` state.
    pub async fn submit(
        &mut self,
        today: NaiveDate,
        directory: &dyn PersonDirectory,
    ) -> Result<(), FlowError> {
        self.require_reviewing("ACCEPTED")?;

        self.violations = validate(&self.registry, self.kind, &self.flags, today);
        if !self.violations.is_empty() {
            self.transition(FlowState::Blocked);
            return Err(FlowError::ValidationBlocked {
                count: self.violations.len(),
            });
        }

        match persist_new_associates(&mut self.registry, self.kind, &self.flags, directory).await {
            Ok(persisted) => {
                tracing::info!(persisted, "draft accepted; participants persisted");
                self.transition(FlowState::Accepted);
                Ok(())
            }
            Err(err) => {
                self.transition(FlowState::ReviewingList);
                Err(FlowError::Persistence(err))
            }
        }
    }

    fn require_state(&self, expected: FlowState, target: &'static str) -> Result<(), FlowError> {
        if self.state != expected {
            return Err(FlowError::InvalidTransition {
                from: self.state,
                to: target,
            });
        }
        Ok(())
    }

    /// Reviewing and blocked are the same resting point as far as
    /// outgoing transitions are concerned; blocked just carries a list.
    fn require_reviewing(&self, target: &'static str) -> Result<(), FlowError> {
        match self.state {
            FlowState::ReviewingList | FlowState::Blocked => Ok(()),
            _ => Err(FlowError::InvalidTransition {
                from: self.state,
                to: target,
            }),
        }
    }

    fn transition(&mut self, to: FlowState) {
        tracing::debug!(from = %self.state, to = %to, "entry flow transition");
        self.state = to;
    }
}

/// Required-field gating for a form commit. Mirrors the form's mandatory
/// inputs; everything else is the validator's business.
fn missing_required_fields(participant: &Participant) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if participant.name.last.trim().is_empty() {
        missing.push("last name");
    }
    if participant.name.first.trim().is_empty() {
        missing.push("first name");
    }
    if participant.birth_place.trim().is_empty() {
        missing.push("birth place");
    }
    if participant.nationality.trim().is_empty() {
        missing.push("nationality");
    }
    missing
}
