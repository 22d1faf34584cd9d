pub mod feature_key;

pub use feature_key::{FeatureKey, FEATURE_PREFIX};
