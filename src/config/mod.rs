//! Configuration loading and management

mod io;
mod source;
mod tracking;

pub use source::{ConfigSource, FileConfigSource, SharedConfig};
pub use tracking::TrackingSettings;

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.crucible/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Edit tracking settings
    #[serde(default)]
    pub tracking: TrackingSettings,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
