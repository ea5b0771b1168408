//! The course catalog

use super::entities::Course;
use crate::core::error::DomainError;
use crate::student::entities::Student;

/// Fixed list of offered courses.
///
/// Constructed once at startup and passed by reference to the operations
/// that need it. There is no editing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Create a catalog from an explicit course list
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The built-in course offering
    pub fn seed() -> Self {
        Self::new(vec![
            Course::new(
                "CSC 101",
                "Introduction to Computer Science",
                "Prof. Smith",
                3,
            ),
            Course::new("ENG 201", "English Literature", "Prof. Johnson", 4),
        ])
    }

    /// All courses, in catalog order
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Look up a course by exact `course_id`
    pub fn find_by_id(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    /// Like [`find_by_id`](Self::find_by_id), but a miss is a [`DomainError::CourseNotFound`]
    pub fn require(&self, course_id: &str) -> Result<&Course, DomainError> {
        self.find_by_id(course_id)
            .ok_or_else(|| DomainError::CourseNotFound(course_id.to_string()))
    }

    /// Catalog courses the student has not taken in any semester
    pub fn available_for(&self, student: &Student) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|course| !student.has_taken(&course.course_id))
            .collect()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::entities::Semester;
    use crate::student::value_objects::{Degree, Department};

    fn student() -> Student {
        Student::new("Alice", "Rahman", "001", "22", Department::Cse, Degree::Bsc)
    }

    #[test]
    fn test_seed_catalog() {
        let catalog = CourseCatalog::seed();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list()[0].course_id, "CSC 101");
        assert_eq!(catalog.list()[1].course_id, "ENG 201");
    }

    #[test]
    fn test_find_by_id_is_exact() {
        let catalog = CourseCatalog::seed();
        assert_eq!(
            catalog.find_by_id("ENG 201").map(|c| c.total_credits),
            Some(4)
        );
        assert!(catalog.find_by_id("eng 201").is_none());
        assert!(catalog.find_by_id(" ENG 201").is_none());
    }

    #[test]
    fn test_require_reports_missing_course() {
        let catalog = CourseCatalog::seed();
        assert_eq!(
            catalog.require("NOPE"),
            Err(DomainError::CourseNotFound("NOPE".to_string()))
        );
    }

    #[test]
    fn test_available_for_new_student_is_full_catalog() {
        let catalog = CourseCatalog::seed();
        let available = catalog.available_for(&student());
        assert_eq!(available.len(), catalog.len());
    }

    #[test]
    fn test_available_excludes_taken_courses() {
        let catalog = CourseCatalog::seed();
        let mut student = student();
        let mut semester = Semester::default();
        semester.push_course(catalog.list()[0].clone());
        student.attend(semester);

        let available = catalog.available_for(&student);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].course_id, "ENG 201");
    }
}
