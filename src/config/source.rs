//! Configuration sources read at the start of every tracking operation
//!
//! Settings are never cached by the tracker, so edits to the config file or
//! runtime changes take effect on the next edit without a restart.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use super::{Config, TrackingSettings};

/// Supplies the current tracking settings
pub trait ConfigSource: Send + Sync {
    fn tracking(&self) -> TrackingSettings;
}

/// Re-reads a TOML config file on every call
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source backed by `~/.crucible/config.toml`
    pub fn global() -> Self {
        Self::new(Config::global_config_path())
    }
}

impl ConfigSource for FileConfigSource {
    fn tracking(&self) -> TrackingSettings {
        match Config::load_or_default(&self.path) {
            Ok(config) => config.tracking,
            Err(e) => {
                tracing::warn!("Falling back to default tracking settings: {:#}", e);
                TrackingSettings::default()
            }
        }
    }
}

/// In-memory settings that can be changed while a session runs
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<TrackingSettings>>,
}

impl SharedConfig {
    pub fn new(settings: TrackingSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Apply a change to the live settings
    pub fn update(&self, f: impl FnOnce(&mut TrackingSettings)) {
        let mut settings = self.inner.write().expect("config lock poisoned");
        f(&mut settings);
    }
}

impl ConfigSource for SharedConfig {
    fn tracking(&self) -> TrackingSettings {
        self.inner.read().expect("config lock poisoned").clone()
    }
}
