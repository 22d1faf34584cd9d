use url::Url;

use crate::domain::FeatureKey;
use crate::features::{FeaturePatch, FeatureStore, FeatureValue};
use crate::query::QueryParams;
use crate::theme::ThemeApplier;

/// Query parameter selecting the legacy embedding mode.
pub const MODE_PARAM: &str = "mode";
/// `mode` value that turns on legacy iframe embedding.
///
/// Kept for customers who still link with it; new modes must not reuse it.
pub const STANDALONE_MODE: &str = "STANDALONE";
/// Query parameter selecting a branded deployment theme.
pub const CUSTOM_THEME_PARAM: &str = "customTheme";
/// `customTheme` value for the Lixiang deployment.
pub const LIXIANG_THEME: &str = "lixiang";

/// Feature holding the custom color scheme the theme applier consumes.
pub const CUSTOM_COLOR_SCHEME: &str = "custom-color-scheme";

/// Flags turned on by `mode=STANDALONE`.
pub const STANDALONE_FEATURES: [&str; 6] = [
    "embedded-in-iframe",
    "hide-help",
    "hide-quick-start",
    "hide-release-remind",
    "disallow-share-worksheet",
    "disallow-navigate-to-console",
];

/// Flags turned on by `customTheme=lixiang`, alongside its color scheme.
pub const LIXIANG_FEATURES: [&str; 2] = ["custom-query-datasource", "disallow-export-query-data"];

/// Lixiang brand colors, as CSS custom properties.
pub const LIXIANG_COLOR_SCHEME: [(&str, &str); 3] = [
    ("--color-accent", "#00665f"),
    ("--color-accent-hover", "#00554f"),
    ("--color-accent-disabled", "#b8c3c3"),
];

/// Extra flag for Lixiang when the app is also embedded.
pub const EMBEDDED_LIXIANG_FEATURE: &str = "hide-issue-review-actions";

/// Apply app profile and feature overrides requested by the page's query
/// parameters, then sync the theme.
///
/// Runs once at startup, before anything else reads the store. Steps run in a
/// fixed order because the Lixiang branch reads the `embedded` flag that the
/// standalone branch sets:
///
/// 1. `mode=STANDALONE` → mark the profile embedded and hide the standalone
///    chrome ([`STANDALONE_FEATURES`]).
/// 2. `customTheme=lixiang` → enable [`LIXIANG_FEATURES`] and the Lixiang
///    color scheme; when embedded, also [`EMBEDDED_LIXIANG_FEATURE`].
/// 3. Always pass the current `custom-color-scheme` (possibly absent) to
///    `theme`.
///
/// Comparisons are exact and case-sensitive; anything else is a no-op.
///
/// # Examples
///
/// ```
/// use app_profile_override::features::{FeatureStore, InMemoryFeatureStore};
/// use app_profile_override::profile::override_app_profile;
/// use app_profile_override::query::QueryParams;
/// use app_profile_override::theme::CssVariableTheme;
///
/// let mut store = InMemoryFeatureStore::default();
/// let mut theme = CssVariableTheme::new();
/// override_app_profile(&QueryParams::parse("?mode=STANDALONE"), &mut store, &mut theme);
///
/// assert!(store.app_profile().embedded);
/// assert_eq!(store.features().len(), 6);
/// assert_eq!(theme.applied_count(), 1);
/// ```
pub fn override_app_profile<S, T>(query: &QueryParams, store: &mut S, theme: &mut T)
where
    S: FeatureStore + ?Sized,
    T: ThemeApplier + ?Sized,
{
    if query.get(MODE_PARAM) == Some(STANDALONE_MODE) {
        tracing::debug!("mode=STANDALONE: enabling legacy embedded profile");
        store.app_profile_mut().embedded = true;
        store.override_app_features(FeaturePatch::flags(STANDALONE_FEATURES));
    }

    if query.get(CUSTOM_THEME_PARAM) == Some(LIXIANG_THEME) {
        tracing::debug!("customTheme=lixiang: enabling Lixiang deployment features");
        store.override_app_features(
            FeaturePatch::flags(LIXIANG_FEATURES).with(
                CUSTOM_COLOR_SCHEME,
                FeatureValue::color_scheme(LIXIANG_COLOR_SCHEME),
            ),
        );
        if store.app_profile().embedded {
            store.override_app_features(FeaturePatch::flags([EMBEDDED_LIXIANG_FEATURE]));
        }
    }

    // Runs even when no branch matched so a baseline scheme is still applied.
    let scheme = store.app_feature(&FeatureKey::new(CUSTOM_COLOR_SCHEME));
    tracing::trace!(present = scheme.is_some(), "syncing custom theme");
    theme.apply_custom_theme(scheme);
}

/// [`override_app_profile`] for an absolute page address.
pub fn override_app_profile_for_url<S, T>(url: &Url, store: &mut S, theme: &mut T)
where
    S: FeatureStore + ?Sized,
    T: ThemeApplier + ?Sized,
{
    override_app_profile(&QueryParams::from_url(url), store, theme)
}
