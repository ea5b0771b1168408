//! Course entity

use crate::core::serde_compat::null_as_default;
use serde::{Deserialize, Serialize};

/// An offered course.
///
/// Identified by `course_id`. Semesters hold copies of catalog entries, so a
/// course stored in a record is a snapshot taken at selection time.
///
/// # Example
///
/// ```
/// use registrar_domain::Course;
///
/// let course = Course::new("CSC 101", "Introduction to Computer Science", "Prof. Smith", 3);
/// assert_eq!(course.course_id, "CSC 101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Course {
    #[serde(rename = "CourseID", default, deserialize_with = "null_as_default")]
    pub course_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teacher_name: String,
    #[serde(default)]
    pub total_credits: i32,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        teacher_name: impl Into<String>,
        total_credits: i32,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            teacher_name: teacher_name.into(),
            total_credits,
        }
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.course_id, self.course_name)
    }
}
