//! Runtime feature flags and the app profile they are resolved against.
//!
//! The hook never owns the store: callers inject anything implementing
//! [`FeatureStore`], which keeps the override logic testable against fakes.

mod patch;
mod store;
mod value;

use serde::Serialize;

use crate::domain::FeatureKey;

pub use patch::FeaturePatch;
pub use store::InMemoryFeatureStore;
pub use value::{ColorScheme, FeatureValue};

/// Describes how the application is currently being hosted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppProfile {
    /// Running inside a host page's iframe (legacy standalone mode).
    pub embedded: bool,
}

/// Session-wide source of truth for feature flags.
///
/// Overrides are last-write-wins per key: applying a patch replaces only the
/// keys it names, and applying the same patch twice leaves the same state.
pub trait FeatureStore {
    fn app_profile(&self) -> &AppProfile;

    fn app_profile_mut(&mut self) -> &mut AppProfile;

    /// Merge `patch` into the active feature set.
    fn override_app_features(&mut self, patch: FeaturePatch);

    /// Current value of a feature flag, `None` when it was never set.
    fn app_feature(&self, key: &FeatureKey) -> Option<&FeatureValue>;
}
