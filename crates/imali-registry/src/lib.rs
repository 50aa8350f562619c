//! # imali-registry — Participant Registry for a Registration Draft
//!
//! Holds the ordered, in-memory collection of participants for one
//! business-registration draft, and the equity auto-distribution engine
//! that tops up unassigned share percentage.
//!
//! ## Design
//!
//! Participants are addressed by a generated [`ParticipantKey`], never by
//! array index. The original portal keyed edits and removals off list
//! position, which silently retargets an edit when a removal shifts the
//! list underneath it; stable keys make that bug unrepresentable.
//!
//! The registry lives only for the duration of the draft. It enforces no
//! legal invariants itself — composition rules are the validator's job —
//! but it does own the mechanical operations: add, edit-in-place, remove,
//! and marking a participant as persisted once the backend has
//! materialized the person record.
//!
//! [`ParticipantKey`]: imali_core::ParticipantKey

pub mod allocation;
pub mod draft;
pub mod participant;
pub mod registry;

#[cfg(test)]
pub(crate) mod testutil;

pub use allocation::{auto_distribute, AllocationOutcome, BALANCE_TOLERANCE};
pub use draft::RegistrationDraft;
pub use participant::{Participant, PersonName, ValidityEnd, ValidityPeriod};
pub use registry::{ParticipantRegistry, RegistryEntry, RegistryError};
