use std::collections::BTreeMap;

use serde::Serialize;

/// CSS custom property name → color value (e.g. `--color-accent` → `#00665f`).
pub type ColorScheme = BTreeMap<String, String>;

/// The value a feature flag can hold.
///
/// Serializes untagged so the JSON report reads `true` or
/// `{"--color-accent": "#00665f"}` rather than a wrapped enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    ColorScheme(ColorScheme),
}

impl FeatureValue {
    /// Build a color scheme value from `(variable, color)` pairs.
    pub fn color_scheme<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        FeatureValue::ColorScheme(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(b) => Some(*b),
            FeatureValue::ColorScheme(_) => None,
        }
    }

    pub fn as_color_scheme(&self) -> Option<&ColorScheme> {
        match self {
            FeatureValue::ColorScheme(scheme) => Some(scheme),
            FeatureValue::Bool(_) => None,
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}
