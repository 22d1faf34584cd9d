pub mod config;
pub mod domain;
pub mod features;
pub mod profile;
pub mod query;
pub mod theme;

pub(crate) mod cli;

pub use cli::apply::{ApplyArgs, ApplyError, OutputFormat};

/// Run the apply subcommand: resolve the page address, run the startup hook
/// against the configured baseline, and print the resulting state.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Not a stable integration API:
/// callers should use [`profile::override_app_profile`] directly.
pub fn run_apply(args: &ApplyArgs) -> Result<(), ApplyError> {
    cli::apply::run(args)
}
