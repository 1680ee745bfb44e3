//! Thread-safe configuration storage.
//!
//! The UI thread and the API worker both read configuration; a small
//! interior-mutability container keeps them consistent without sharing
//! anything else.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config. Cheap because Config is Clone.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_initial_config() {
        let store = ConfigStore::new(Config::default(), PathBuf::from("/tmp/inventario.toml"));
        assert_eq!(store.get(), Config::default());
        assert_eq!(store.path(), Path::new("/tmp/inventario.toml"));
    }
}
