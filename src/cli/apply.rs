use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{Config, ConfigError};
use crate::domain::FeatureKey;
use crate::features::{AppProfile, ColorScheme, FeatureStore, FeatureValue, InMemoryFeatureStore};
use crate::profile;
use crate::query::{QueryError, QueryParams};
use crate::theme::CssVariableTheme;

/// Arguments for the `apply` subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct ApplyArgs {
    /// Page address the app was loaded from (read from stdin when omitted)
    #[arg(long)]
    pub url: Option<String>,

    /// Path to a KDL config describing the baseline profile and features
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// What to print once the overrides are applied
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Output shape for the `apply` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Profile, features, and theme variables as one JSON object
    #[default]
    Json,
    /// The `:root` CSS rule for the active theme
    Css,
}

/// Everything that can stop the `apply` subcommand.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ApplyError {
    #[error("failed to read page address from stdin")]
    #[diagnostic(code(app_profile_override::stdin))]
    Stdin(#[source] std::io::Error),

    #[error(transparent)]
    #[diagnostic(
        code(app_profile_override::config),
        help("expected `profile {{ embedded #true }}` and `features {{ <name> #true }}` sections")
    )]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(
        code(app_profile_override::url),
        help("pass an absolute URL, or a search string starting with '?'")
    )]
    Query(#[from] QueryError),
}

/// JSON report printed by `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyReport<'a> {
    app_profile: &'a AppProfile,
    features: &'a BTreeMap<FeatureKey, FeatureValue>,
    custom_theme: &'a ColorScheme,
}

/// Execute the apply subcommand.
///
/// Loads the baseline store from `--config` (empty store when omitted), runs
/// the startup hook for the page address, then prints the resulting state.
pub fn run(args: &ApplyArgs) -> Result<(), ApplyError> {
    let mut store = match &args.config {
        Some(path) => Config::load(path)?.into_store(),
        None => InMemoryFeatureStore::default(),
    };

    let address = match &args.url {
        Some(url) => url.clone(),
        None => read_stdin()?,
    };
    let query = QueryParams::from_address(&address)?;
    tracing::info!(address = %address.trim(), "applying app profile overrides");

    let mut theme = CssVariableTheme::new();
    profile::override_app_profile(&query, &mut store, &mut theme);

    match args.format {
        OutputFormat::Json => output_json(&ApplyReport {
            app_profile: store.app_profile(),
            features: store.features(),
            custom_theme: theme.variables(),
        }),
        OutputFormat::Css => print!("{}", theme.to_css()),
    }
    Ok(())
}

fn read_stdin() -> Result<String, ApplyError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(ApplyError::Stdin)?;
    Ok(input)
}

/// Serialize the report to JSON and print to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with derived
/// `Serialize` impls over strings, booleans, and string-keyed maps. This is
/// an invariant, not a runtime error.
fn output_json(report: &ApplyReport) {
    let json = serde_json::to_string(report).expect("ApplyReport serialization cannot fail");
    println!("{json}");
}
