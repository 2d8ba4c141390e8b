//! Configuration for the hub, read from a TOML file with environment overrides.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::post_onboarding::FeatureFlags;

pub use loader::{CliOverrides, load_configuration};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub post_onboarding: PostOnboardingConfig,
    #[serde(default)]
    pub feature_flags: FeatureFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostOnboardingConfig {
    /// Serve the demo action sequence instead of the production one.
    #[serde(default)]
    pub mock: bool,
}
