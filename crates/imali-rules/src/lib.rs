//! # imali-rules — Legal Composition Rules
//!
//! Pure derivations with no state: what roles a registration may contain
//! for a given enterprise kind, and which supporting documents each
//! participant owes given the filer's company-level disclosures.
//!
//! Everything here is a total function over core types. The validator
//! crate is the only consumer that combines these rules with an actual
//! registry.

pub mod documents;
pub mod role_rules;

pub use documents::{derived_marital_status, manager_grade, required_documents};
pub use role_rules::{ManagerLimit, ParticipantLimit, RoleRuleSet};
