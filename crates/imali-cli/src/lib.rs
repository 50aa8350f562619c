//! # imali-cli — Draft Tooling
//!
//! Subcommand handlers for the `imali` binary. Each module owns one
//! subcommand's argument struct and its `run` function; `main` only
//! dispatches.

pub mod distribute;
pub mod validate;
