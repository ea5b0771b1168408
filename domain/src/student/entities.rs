//! Student and semester entities

use super::value_objects::{Degree, Department};
use crate::catalog::entities::Course;
use crate::core::serde_compat::null_as_default;
use serde::{Deserialize, Serialize};

/// A semester attached to one student.
///
/// Semesters have no identifier of their own; they are addressed by their
/// owning student and position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Semester {
    #[serde(default, deserialize_with = "null_as_default")]
    pub semester_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<Course>,
}

impl Semester {
    pub fn new(semester_name: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            semester_name: semester_name.into(),
            year: year.into(),
            courses: Vec::new(),
        }
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    pub fn push_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn contains_course(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.course_id == course_id)
    }

    /// Re-order courses by ascending course name (ordinal comparison, stable)
    pub fn sort_courses_by_name(&mut self) {
        self.courses.sort_by(|a, b| a.course_name.cmp(&b.course_name));
    }
}

/// A student record.
///
/// `student_id` is the lookup key. Uniqueness is expected but not enforced;
/// lookups only ever see the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(rename = "StudentID", default, deserialize_with = "null_as_default")]
    pub student_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub joining_batch: String,
    pub department: Department,
    pub degree: Degree,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semesters_attended: Vec<Semester>,
}

impl Student {
    /// Create a student with no middle name and no semesters
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        student_id: impl Into<String>,
        joining_batch: impl Into<String>,
        department: Department,
        degree: Degree,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            student_id: student_id.into(),
            joining_batch: joining_batch.into(),
            department,
            degree,
            semesters_attended: Vec::new(),
        }
    }

    /// Set the middle name. Blank input leaves it absent.
    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        let middle_name = middle_name.into();
        self.middle_name = (!middle_name.trim().is_empty()).then_some(middle_name);
        self
    }

    /// "First Last", the same form the listing shows
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether any attended semester contains the course
    pub fn has_taken(&self, course_id: &str) -> bool {
        self.semesters_attended
            .iter()
            .any(|s| s.contains_course(course_id))
    }

    /// Append a semester to the history
    pub fn attend(&mut self, semester: Semester) {
        self.semesters_attended.push(semester);
    }

    /// Sort every semester's courses by name, in place
    pub fn sort_all_courses(&mut self) {
        for semester in &mut self.semesters_attended {
            semester.sort_courses_by_name();
        }
    }

    /// Whether the first name starts with the letter "a", ignoring case
    pub fn first_name_starts_with_a(&self) -> bool {
        self.first_name
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'a'))
    }
}
