use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::{info, trace};

use super::HubConfig;

pub const ENV_PREFIX: &str = "WALLET_HUB";

/// Overrides supplied on the command line, applied after the file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mock: Option<bool>,
}

impl CliOverrides {
    fn property_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = Vec::new();
        if let Some(mock) = self.mock {
            overrides.push(("post_onboarding.mock".to_string(), mock.to_string()));
        }
        overrides
    }
}

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Loads the configuration at `path`, writing the default file first if it does not exist.
pub fn load_configuration(path: &Path, overrides: &CliOverrides) -> Result<HubConfig> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let mut builder = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"));

    for (key, value) in overrides.property_overrides() {
        trace!("Set override: ({key}, {value})");
        builder = builder
            .set_override(key.as_str(), value.as_str())
            .context("Could not override config property")?;
    }

    builder
        .build()
        .context("Could not build config")?
        .try_deserialize()
        .context("Invalid configuration")
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
