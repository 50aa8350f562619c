//! # imali CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// InvestMali registration toolchain.
///
/// Validates participant composition for a business-registration draft
/// and auto-distributes remaining equity.
#[derive(Parser, Debug)]
#[command(name = "imali", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check a draft against the legal composition rules.
    Validate(imali_cli::validate::ValidateArgs),
    /// Split unassigned equity equally across participants.
    Distribute(imali_cli::distribute::DistributeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Validate(args) => imali_cli::validate::run(&args)?,
        Commands::Distribute(args) => imali_cli::distribute::run(&args)?,
    };

    std::process::exit(exit_code);
}
