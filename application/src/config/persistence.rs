//! Persistence settings: Record Store location and write strategy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default Record Store file, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "students.json";

/// Where the Record Store is persisted and how saves are performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceSettings {
    /// Path of the JSON file holding every student record.
    pub path: PathBuf,
    /// Write to a sibling temp file and rename it over the target.
    ///
    /// When `false` the target is overwritten in place.
    pub atomic_write: bool,
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            atomic_write: true,
        }
    }
}

impl PersistenceSettings {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_atomic_write(mut self, atomic: bool) -> Self {
        self.atomic_write = atomic;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PersistenceSettings::default();
        assert_eq!(settings.path, PathBuf::from("students.json"));
        assert!(settings.atomic_write);
    }

    #[test]
    fn test_builder() {
        let settings = PersistenceSettings::default()
            .with_path("/tmp/records.json")
            .with_atomic_write(false);
        assert_eq!(settings.path, PathBuf::from("/tmp/records.json"));
        assert!(!settings.atomic_write);
    }
}
