//! Interactive menu shell
//!
//! - [`input`]: line sources (reedline for terminals, buffered readers otherwise)
//! - [`menu`]: menu option parsing
//! - [`repl`]: the dashboard loop that drives the record operations

pub mod input;
pub mod menu;
pub mod repl;
