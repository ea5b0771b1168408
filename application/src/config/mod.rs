//! Application-level configuration.
//!
//! - [`PersistenceSettings`]: where the Record Store lives and how it is written

pub mod persistence;

pub use persistence::PersistenceSettings;
