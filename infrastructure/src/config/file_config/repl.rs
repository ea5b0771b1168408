//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file (`~/` is expanded)
    pub history_file: Option<String>,
    /// Prompt for semester name and year when adding a semester
    pub ask_semester_details: bool,
}

impl FileReplConfig {
    /// History file path with a leading `~/` expanded to the home directory
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?;
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_absent() {
        assert_eq!(FileReplConfig::default().history_path(), None);
    }

    #[test]
    fn test_history_path_plain() {
        let config = FileReplConfig {
            history_file: Some("/tmp/history.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/history.txt")));
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/.local/share/registrar/history.txt".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                config.history_path(),
                Some(home.join(".local/share/registrar/history.txt"))
            );
        }
    }
}
