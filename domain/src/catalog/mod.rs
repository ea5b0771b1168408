//! Course catalog domain.
//!
//! - [`entities::Course`]: a single offered course
//! - [`course_catalog::CourseCatalog`]: the fixed, read-only list of courses

pub mod course_catalog;
pub mod entities;
