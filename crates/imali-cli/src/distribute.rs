//! # `imali distribute` — Equity Top-Up
//!
//! Loads a draft, splits the unassigned share percentage equally across
//! share-bearing participants, and prints the updated draft as JSON on
//! stdout (so the result can be piped back into `imali validate`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use imali_registry::{auto_distribute, AllocationOutcome, RegistrationDraft};

/// Arguments for the distribute subcommand.
#[derive(Args, Debug)]
pub struct DistributeArgs {
    /// Path to the registration draft JSON.
    pub draft: PathBuf,
}

/// Run the distribution and return the process exit code.
pub fn run(args: &DistributeArgs) -> anyhow::Result<i32> {
    let raw = std::fs::read_to_string(&args.draft)
        .with_context(|| format!("reading draft {}", args.draft.display()))?;
    let draft: RegistrationDraft =
        serde_json::from_str(&raw).context("parsing registration draft JSON")?;

    let (kind, flags, mut registry) = draft.into_registry();
    let outcome = auto_distribute(&mut registry);
    match outcome {
        AllocationOutcome::AlreadyBalanced => {
            eprintln!("shares already sum to 100 within tolerance; nothing to distribute");
        }
        AllocationOutcome::NoShareBearers => {
            eprintln!("no share-bearing participants in the draft");
        }
        AllocationOutcome::Distributed {
            per_participant,
            recipients,
        } => {
            eprintln!("topped up {recipients} participant(s) by {per_participant:.2} points each");
        }
    }

    let updated = RegistrationDraft::from_registry(kind, flags, &registry);
    let json = serde_json::to_string_pretty(&updated).context("serializing updated draft")?;
    println!("{json}");
    Ok(0)
}
