mod document;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::FeatureKey;
use crate::features::{AppProfile, ColorScheme, FeatureValue, InMemoryFeatureStore};

use document::{ConfigDocument, ConfigNode, EntryValue};

/// Baseline store state loaded from a KDL file, before any query overrides.
///
/// ```kdl
/// profile {
///     embedded #false
/// }
/// features {
///     hide-help #true
///     custom-color-scheme {
///         "--color-accent" "#1f6feb"
///     }
/// }
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub profile: AppProfile,
    pub features: BTreeMap<FeatureKey, FeatureValue>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

const PROFILE_SECTION: &str = "profile";
const FEATURES_SECTION: &str = "features";

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::load(path)?;
        let config = Self::from_document(&doc)?;
        tracing::debug!(
            path = %path.display(),
            features = config.features.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::parse(content)?;
        Self::from_document(&doc)
    }

    /// Build the feature store the startup hook runs against.
    pub fn into_store(self) -> InMemoryFeatureStore {
        InMemoryFeatureStore::new(self.profile, self.features)
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        for section in doc.sections() {
            let line = section.line();
            let nodes = section.children().unwrap_or_default();
            match section.name() {
                PROFILE_SECTION => parse_profile(&nodes, &mut config.profile)?,
                FEATURES_SECTION => parse_features(&nodes, &mut config.features)?,
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "line {line}: unknown section '{other}' (expected '{PROFILE_SECTION}' or '{FEATURES_SECTION}')"
                    )))
                }
            }
        }
        Ok(config)
    }
}

fn parse_profile(nodes: &[ConfigNode], profile: &mut AppProfile) -> Result<(), ConfigError> {
    for node in nodes {
        match node.name() {
            "embedded" => profile.embedded = expect_bool(node)?,
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "line {}: unknown profile field '{other}'",
                    node.line()
                )))
            }
        }
    }
    Ok(())
}

/// Each node is one feature: a single boolean, or a children block of
/// `"<css variable>" "<color>"` pairs for color schemes.
fn parse_features(
    nodes: &[ConfigNode],
    features: &mut BTreeMap<FeatureKey, FeatureValue>,
) -> Result<(), ConfigError> {
    for node in nodes {
        let line = node.line();
        let key = FeatureKey::new(node.name());
        let value = match node.children() {
            Some(block) => {
                if !node.entries().is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "line {line}: feature '{}' has both a value and a color block",
                        key.short_name()
                    )));
                }
                FeatureValue::ColorScheme(parse_color_scheme(&block)?)
            }
            None => FeatureValue::Bool(expect_bool(node)?),
        };
        if features.insert(key.clone(), value).is_some() {
            tracing::warn!(feature = %key, line, "duplicate feature in config; last value wins");
        }
    }
    Ok(())
}

fn parse_color_scheme(block: &[ConfigNode]) -> Result<ColorScheme, ConfigError> {
    let mut scheme = ColorScheme::new();
    for node in block {
        let line = node.line();
        let variable = node.name();
        if !variable.starts_with("--") {
            return Err(ConfigError::ValidationError(format!(
                "line {line}: color variable '{variable}' must start with '--'"
            )));
        }
        match node.entries().as_slice() {
            [EntryValue::String(color)] => {
                scheme.insert(variable.to_string(), color.to_string());
            }
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "line {line}: color variable '{variable}' needs exactly one string color"
                )))
            }
        }
    }
    Ok(scheme)
}

fn expect_bool(node: &ConfigNode) -> Result<bool, ConfigError> {
    match node.entries().as_slice() {
        [EntryValue::Bool(value)] => Ok(*value),
        _ => Err(ConfigError::ValidationError(format!(
            "line {}: '{}' expects a single boolean (#true or #false)",
            node.line(),
            node.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureStore;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn key(raw: &str) -> FeatureKey {
        FeatureKey::new(raw)
    }

    // --- KDL Parsing Tests ---

    #[test]
    fn parse_valid_kdl_with_all_sections() {
        let config = Config::parse(
            r##"
            profile {
                embedded #true
            }
            features {
                hide-help #true
                bb.feature.hide-quick-start #false
                custom-color-scheme {
                    "--color-accent" "#1f6feb"
                    "--color-accent-hover" "#1a5fd0"
                }
            }
            "##,
        )
        .unwrap();

        assert!(config.profile.embedded);
        assert_eq!(config.features.len(), 3);
        assert_eq!(config.features[&key("hide-help")], FeatureValue::Bool(true));
        assert_eq!(
            config.features[&key("hide-quick-start")],
            FeatureValue::Bool(false)
        );
        assert_eq!(
            config.features[&key("custom-color-scheme")],
            FeatureValue::color_scheme([
                ("--color-accent", "#1f6feb"),
                ("--color-accent-hover", "#1a5fd0"),
            ])
        );
    }

    #[test]
    fn parse_kdl_with_missing_sections() {
        let config = Config::parse("features { hide-help #true }").unwrap();

        assert!(!config.profile.embedded);
        assert_eq!(config.features.len(), 1);
    }

    #[test]
    fn parse_empty_kdl_file() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_kdl_returns_parse_error() {
        let result = Config::parse("this is { not valid { kdl");
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_section_is_rejected_with_line() {
        let err = Config::parse("profile {}\nthemes {}").unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => {
                assert!(msg.contains("line 2"), "got: {msg}");
                assert!(msg.contains("themes"), "got: {msg}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_profile_field_is_rejected() {
        let err = Config::parse("profile { mode \"STANDALONE\" }").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn non_boolean_feature_is_rejected_with_line() {
        let err = Config::parse("features {\n    hide-help \"yes\"\n}").unwrap_err();
        match err {
            ConfigError::ValidationError(msg) => {
                assert!(msg.contains("line 2"), "got: {msg}");
                assert!(msg.contains("hide-help"), "got: {msg}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn feature_with_two_values_is_rejected() {
        let err = Config::parse("features { hide-help #true #false }").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn feature_with_value_and_block_is_rejected() {
        let err = Config::parse(
            r##"features { custom-color-scheme #true { "--color-accent" "#fff" } }"##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn color_variable_without_dashes_is_rejected() {
        let err = Config::parse(r##"features { custom-color-scheme { accent "#fff" } }"##)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn color_variable_needs_one_string() {
        let err = Config::parse(r#"features { custom-color-scheme { "--color-accent" 12 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn duplicate_feature_last_wins() {
        let config = Config::parse(
            r#"
            features {
                hide-help #true
                hide-help #false
            }
            "#,
        )
        .unwrap();
        assert_eq!(config.features[&key("hide-help")], FeatureValue::Bool(false));
    }

    #[test]
    fn into_store_seeds_profile_and_features() {
        let config = Config::parse("profile { embedded #true }\nfeatures { hide-help #true }")
            .unwrap();
        let store = config.into_store();
        assert!(store.app_profile().embedded);
        assert_eq!(
            store.app_feature(&key("hide-help")),
            Some(&FeatureValue::Bool(true))
        );
    }

    // --- File Loading Tests ---

    #[test]
    fn load_nonexistent_file_returns_not_found() {
        let result = Config::load(Path::new("/tmp/does-not-exist-app-profile-12345.kdl"));
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn load_valid_file_from_disk() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        writeln!(
            tmpfile,
            r#"profile {{
    embedded #true
}}
features {{
    hide-help #true
}}"#
        )
        .unwrap();

        let config = Config::load(tmpfile.path()).unwrap();
        assert!(config.profile.embedded);
        assert_eq!(config.features[&key("hide-help")], FeatureValue::Bool(true));
    }

    #[test]
    fn load_file_with_invalid_kdl_returns_parse_error() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        writeln!(tmpfile, "invalid {{ kdl {{ syntax").unwrap();

        let result = Config::load(tmpfile.path());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }
}
