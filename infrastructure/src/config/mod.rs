//! Configuration file loading for student-registrar
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REGISTRAR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./registrar.toml` or `./.registrar.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/student-registrar/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileReplConfig, FileStoreConfig};
pub use loader::ConfigLoader;
