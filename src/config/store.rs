//! Shared configuration storage.
//!
//! Pages hold clones of the store: they read their section when built and
//! write it back on commit. The binary saves the store once the dialog was
//! accepted.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Loads the file at `path` (defaults if missing) into a new store.
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Mutate the config in place.
    pub fn update(&self, f: impl FnOnce(&mut Config)) {
        f(&mut *self.inner.write());
    }

    /// Write the current config back to its file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.get().save_to(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
