//! Infrastructure layer for student-registrar
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileReplConfig, FileStoreConfig};
pub use persistence::JsonFileStudentRepository;
