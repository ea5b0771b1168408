//! Record Store configuration from TOML (`[store]` section)

use registrar_application::PersistenceSettings;
use registrar_application::config::persistence::DEFAULT_STORE_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Path of the JSON record file, relative to the working directory
    pub path: String,
    /// Save through a temp file + rename instead of overwriting in place
    pub atomic_write: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
            atomic_write: true,
        }
    }
}

impl FileStoreConfig {
    pub fn to_settings(&self) -> PersistenceSettings {
        PersistenceSettings::default()
            .with_path(PathBuf::from(&self.path))
            .with_atomic_write(self.atomic_write)
    }
}
