//! # `imali validate` — Composition Check
//!
//! Loads a registration draft from JSON, runs the eligibility validator,
//! and prints the violation list. Exits non-zero when the draft is
//! blocked so the command composes in scripts.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Args;

use imali_registry::RegistrationDraft;
use imali_validate::validate;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the registration draft JSON.
    pub draft: PathBuf,

    /// Validation date override (YYYY-MM-DD); defaults to today in UTC.
    /// The age gate is computed against this date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Run the validation and return the process exit code.
pub fn run(args: &ValidateArgs) -> anyhow::Result<i32> {
    let raw = std::fs::read_to_string(&args.draft)
        .with_context(|| format!("reading draft {}", args.draft.display()))?;
    let draft: RegistrationDraft =
        serde_json::from_str(&raw).context("parsing registration draft JSON")?;

    let (kind, flags, registry) = draft.into_registry();
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());

    tracing::debug!(%kind, participants = registry.len(), %today, "validating draft");
    let violations = validate(&registry, kind, &flags, today);

    if violations.is_empty() {
        println!(
            "OK: {} registration with {} participant(s) is legally complete",
            kind,
            registry.len()
        );
        return Ok(0);
    }

    println!("BLOCKED: {} violation(s)", violations.len());
    for violation in &violations {
        println!("  - {violation}");
    }
    Ok(1)
}
