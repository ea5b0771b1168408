//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod add_semester;
pub mod add_student;
pub mod delete_student;
pub mod list_students;
pub mod record_session;
pub mod view_student;
