use serde::Serialize;

/// Namespace shared by every application feature flag.
pub const FEATURE_PREFIX: &str = "bb.feature.";

/// A normalized feature-flag key (always carrying the `bb.feature.` namespace).
///
/// Constructed from a raw key string; short names such as `hide-help` become
/// `bb.feature.hide-help`. Already-namespaced keys are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureKey(String);

impl FeatureKey {
    /// Normalize a feature key.
    ///
    /// - Already starts with `bb.feature.` → kept as-is
    /// - Anything else → prefixed with `bb.feature.`
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with(FEATURE_PREFIX) {
            FeatureKey(raw.to_string())
        } else {
            FeatureKey(format!("{FEATURE_PREFIX}{raw}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key without its namespace (`bb.feature.hide-help` → `hide-help`).
    pub fn short_name(&self) -> &str {
        self.0.strip_prefix(FEATURE_PREFIX).unwrap_or(&self.0)
    }
}

impl PartialEq<str> for FeatureKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FeatureKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for FeatureKey {
    fn from(raw: &str) -> Self {
        FeatureKey::new(raw)
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
