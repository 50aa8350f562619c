//! # imali-core — Foundational Types for the Registration Engine
//!
//! This crate is the bedrock of the InvestMali participant engine. It defines
//! the domain primitives shared by every other crate in the workspace; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ParticipantKey`, `PersonId`,
//!    `DraftId`, `AccountId` — all newtypes. No bare strings or UUIDs for
//!    identifiers, so a person reference can never be confused with a
//!    registry key.
//!
//! 2. **Single `Role` enum.** One definition, three variants, exhaustive
//!    `match` everywhere. The wire representation keeps the registry's
//!    French vocabulary (`GERANT`, `DIRIGEANT`, `ASSOCIE`).
//!
//! 3. **Upload policy as data.** File acceptance, the 50 MB hard cap, and
//!    the image recompression threshold are pure decisions over
//!    `(name, size)`; no pixel work happens in this workspace.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `imali-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a wire.

pub mod civil;
pub mod document;
pub mod enterprise;
pub mod identity;
pub mod role;
pub mod upload;

// Re-export primary types for ergonomic imports.
pub use civil::{Civility, MaritalStatus, Sex};
pub use document::{DocKind, FileFormat, FileRef, IdentityDocument, SignatureCapture};
pub use enterprise::{CompanyFlags, EnterpriseKind};
pub use identity::{AccountId, DraftId, ParticipantKey, PersonId};
pub use role::Role;
pub use upload::{
    evaluate_upload, CompressionPlan, UploadDecision, UploadRejection,
    IMAGE_RECOMPRESSION_THRESHOLD_BYTES, MAX_UPLOAD_BYTES,
};
