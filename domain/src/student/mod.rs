//! Student records domain.
//!
//! - [`entities::Student`]: a student's personal details and semester history
//! - [`entities::Semester`]: a grouping of courses attached to one student
//! - [`value_objects::Department`] / [`value_objects::Degree`]: closed enrollment enums
//! - [`record_store::RecordStore`]: the in-memory list of all students

pub mod entities;
pub mod record_store;
pub mod value_objects;
