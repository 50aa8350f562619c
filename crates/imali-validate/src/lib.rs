//! # imali-validate — Eligibility Validation
//!
//! Decides whether a set of participants may legally register the
//! company. The validator never fails and never truncates: every broken
//! rule contributes one human-readable violation, and the caller gets
//! the full ordered list. An empty list means the draft may proceed.
//!
//! ## Design
//!
//! Validation is a pure function of the registry, the enterprise kind,
//! the filer's company-level disclosures, and a caller-supplied "today"
//! for the age gate. Nothing here reads clocks or ambient state, which
//! keeps the age boundary testable to the day.

pub mod validator;
pub mod violation;

pub use validator::validate;
pub use violation::{Violation, ViolationCode};
