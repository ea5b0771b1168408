//! Presentation layer for student-registrar
//!
//! This crate contains CLI definitions, the console formatter,
//! and the interactive menu shell.

pub mod cli;
pub mod config;
pub mod output;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use shell::input::{BufReadLines, LineEvent, LineReader, ReedlineLines};
pub use shell::repl::{RegistrarShell, ShellError, ShellExit};
