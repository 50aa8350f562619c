//! # imali-flow — Participant-Entry Flow
//!
//! Drives a registration draft from "nobody declared yet" to "accepted
//! and persisted". Three concerns live here:
//!
//! - the **state machine** gating which mutations are legal when
//!   (`EntryFlow`), with the same enum-plus-validated-transitions shape
//!   used elsewhere in the workspace;
//! - **filer synthesis**: turning the authenticated account's profile
//!   into the first participant, passed in explicitly rather than read
//!   from ambient storage;
//! - the **persistence saga**: persisting newly-added associates to the
//!   external person service one at a time, idempotent on `person_id`
//!   presence so a retry never duplicates an already-created person.
//!
//! Full legal validation only ever happens inside the flow's submit
//! step; form commits check required-field presence and nothing more.

pub mod persist;
pub mod profile;
pub mod state;

pub use persist::{
    persist_new_associates, PersonDirectory, PersonDraft, PersonServiceError, PersistenceError,
};
pub use profile::FilerProfile;
pub use state::{EntryFlow, FlowError, FlowState};
