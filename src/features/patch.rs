use std::collections::BTreeMap;

use crate::domain::FeatureKey;

use super::FeatureValue;

/// A partial set of feature values applied to a store in one override call.
///
/// Only the keys present in the patch are replaced; everything else in the
/// store is left as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePatch {
    entries: BTreeMap<FeatureKey, FeatureValue>,
}

impl FeaturePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that turns every listed flag on.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_profile_override::features::FeaturePatch;
    ///
    /// let patch = FeaturePatch::flags(["hide-help", "hide-quick-start"]);
    /// assert_eq!(patch.len(), 2);
    /// ```
    pub fn flags<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter()
            .fold(Self::new(), |patch, key| patch.with(key, true))
    }

    /// Add or replace one entry, builder style.
    pub fn with(mut self, key: impl Into<FeatureKey>, value: impl Into<FeatureValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &FeatureKey) -> Option<&FeatureValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FeatureKey> {
        self.entries.keys()
    }
}

impl IntoIterator for FeaturePatch {
    type Item = (FeatureKey, FeatureValue);
    type IntoIter = std::collections::btree_map::IntoIter<FeatureKey, FeatureValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
