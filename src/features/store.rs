use std::collections::BTreeMap;

use crate::domain::FeatureKey;

use super::{AppProfile, FeaturePatch, FeatureStore, FeatureValue};

/// Feature store backed by an ordered in-memory map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryFeatureStore {
    profile: AppProfile,
    features: BTreeMap<FeatureKey, FeatureValue>,
}

impl InMemoryFeatureStore {
    /// Seed a store with a baseline profile and feature set.
    pub fn new(profile: AppProfile, features: BTreeMap<FeatureKey, FeatureValue>) -> Self {
        Self { profile, features }
    }

    /// All active features, ordered by key.
    pub fn features(&self) -> &BTreeMap<FeatureKey, FeatureValue> {
        &self.features
    }
}

impl FeatureStore for InMemoryFeatureStore {
    fn app_profile(&self) -> &AppProfile {
        &self.profile
    }

    fn app_profile_mut(&mut self) -> &mut AppProfile {
        &mut self.profile
    }

    fn override_app_features(&mut self, patch: FeaturePatch) {
        for (key, value) in patch {
            tracing::trace!(feature = %key, ?value, "override feature");
            self.features.insert(key, value);
        }
    }

    fn app_feature(&self, key: &FeatureKey) -> Option<&FeatureValue> {
        self.features.get(key)
    }
}
