//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the registration engine.
//! These prevent accidental identifier confusion — you cannot pass a
//! `ParticipantKey` where a `PersonId` is expected.
//!
//! `ParticipantKey` deliberately replaces the array-index addressing of
//! the original portal: edits and removals reorder the list, and an index
//! captured before a removal silently points at a different person after
//! it. A generated key stays attached to the same participant for the
//! lifetime of the draft.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable local key for one participant row within a registration draft.
///
/// Generated when the participant is added; never reused, never shifted
/// by removals. Local to the draft — the backend never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantKey(pub Uuid);

/// Identifier for one business-registration draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(pub Uuid);

/// External person identifier assigned by the person service once a
/// participant has been materialized in the backend.
///
/// Presence of a `PersonId` on a participant is the idempotency marker
/// for the persistence saga: persisted participants are never re-created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub String);

/// Identifier of the authenticated portal account (the filer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl ParticipantKey {
    /// Generate a new random participant key.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ParticipantKey {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftId {
    /// Generate a new random draft identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "participant:{}", self.0)
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draft:{}", self.0)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "person:{}", self.0)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}
