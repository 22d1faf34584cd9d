//! Applying a custom color scheme to the page.

use crate::features::{ColorScheme, FeatureValue};

/// Receives the active `custom-color-scheme` value once per startup.
pub trait ThemeApplier {
    /// Apply `scheme`, or reset to stylesheet defaults when it is absent or
    /// not a color scheme.
    fn apply_custom_theme(&mut self, scheme: Option<&FeatureValue>);
}

/// Theme applier that tracks the CSS custom properties set on `:root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariableTheme {
    variables: ColorScheme,
    applied_count: usize,
}

impl CssVariableTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom properties currently overriding the stylesheet.
    pub fn variables(&self) -> &ColorScheme {
        &self.variables
    }

    /// Number of times a theme has been applied.
    pub fn applied_count(&self) -> usize {
        self.applied_count
    }

    /// Render the active variables as a `:root` rule.
    ///
    /// Returns an empty string when nothing is overridden.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_profile_override::features::FeatureValue;
    /// use app_profile_override::theme::{CssVariableTheme, ThemeApplier};
    ///
    /// let mut theme = CssVariableTheme::new();
    /// theme.apply_custom_theme(Some(&FeatureValue::color_scheme([("--color-accent", "#00665f")])));
    /// assert_eq!(theme.to_css(), ":root {\n  --color-accent: #00665f;\n}\n");
    /// ```
    pub fn to_css(&self) -> String {
        if self.variables.is_empty() {
            return String::new();
        }
        let declarations: String = self
            .variables
            .iter()
            .map(|(name, value)| format!("  {name}: {value};\n"))
            .collect();
        format!(":root {{\n{declarations}}}\n")
    }
}

impl ThemeApplier for CssVariableTheme {
    fn apply_custom_theme(&mut self, scheme: Option<&FeatureValue>) {
        self.applied_count += 1;
        match scheme.and_then(FeatureValue::as_color_scheme) {
            Some(scheme) => {
                tracing::debug!(variables = scheme.len(), "applying custom color scheme");
                self.variables = scheme.clone();
            }
            None => {
                if scheme.is_some() {
                    tracing::warn!("custom-color-scheme is not a color mapping; using defaults");
                }
                self.variables.clear();
            }
        }
    }
}
