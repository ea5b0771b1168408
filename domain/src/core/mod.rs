//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`serde_compat`]: lenient deserializers for older record files

pub mod error;
pub mod serde_compat;
