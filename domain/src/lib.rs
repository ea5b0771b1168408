//! Domain layer for student-registrar
//!
//! This crate contains the student record model, the course catalog, and the
//! in-memory Record Store. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Record Store
//!
//! The [`RecordStore`] is the single mutable aggregate: an ordered list of
//! [`Student`] records, each owning its own [`Semester`] history.
//!
//! ## Course Catalog
//!
//! The [`CourseCatalog`] is a fixed, read-only list of offered courses.
//! Courses are copied into semesters when selected, so later catalog changes
//! never reach existing records.

pub mod catalog;
pub mod core;
pub mod student;

// Re-export commonly used types
pub use catalog::{course_catalog::CourseCatalog, entities::Course};
pub use core::error::DomainError;
pub use student::{
    entities::{Semester, Student},
    record_store::RecordStore,
    value_objects::{Degree, Department},
};
