use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use app_profile_override::ApplyArgs;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "APP_PROFILE_LOG";

/// Apply app profile and feature-flag overrides from page query parameters.
#[derive(Debug, Parser)]
#[command(name = "app-profile-override", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the startup override hook for a page address and print the result
    Apply(ApplyArgs),
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Apply(args) => app_profile_override::run_apply(&args)?,
    }
    Ok(())
}

// Logs go to stderr so stdout stays machine-readable.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
