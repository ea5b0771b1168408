//! Add semester use case
//!
//! Builds a new semester from course-ID tokens and appends it to a student.
//!
//! # Flow
//!
//! 1. The caller asks for [`AddSemesterUseCase::available_courses`] to show
//!    the catalog courses the student has not taken yet.
//! 2. The caller submits course-ID tokens via [`AddSemesterUseCase::execute`].
//!    Each token is trimmed and looked up in the full catalog; the available
//!    set is not consulted, so an already-taken course is added again.
//! 3. Unknown tokens are reported in [`AddSemesterOutput::not_found`], as
//!    typed, and skipped. The semester is appended even when every token misses.

use registrar_domain::{Course, CourseCatalog, DomainError, RecordStore, Semester};
use tracing::{info, warn};

/// Input for the AddSemester use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSemesterInput {
    pub student_id: String,
    /// Raw course-ID tokens, untrimmed
    pub course_ids: Vec<String>,
    /// Left blank unless the caller sets it
    pub semester_name: String,
    /// Left blank unless the caller sets it
    pub year: String,
}

impl AddSemesterInput {
    pub fn new(student_id: impl Into<String>, course_ids: Vec<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_ids,
            semester_name: String::new(),
            year: String::new(),
        }
    }

    /// Split a comma-separated line into course-ID tokens
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar_application::AddSemesterInput;
    ///
    /// let input = AddSemesterInput::from_comma_separated("001", "CSC 101, NOPE");
    /// assert_eq!(input.course_ids, vec!["CSC 101", " NOPE"]);
    /// ```
    pub fn from_comma_separated(student_id: impl Into<String>, line: &str) -> Self {
        Self::new(student_id, line.split(',').map(str::to_string).collect())
    }

    pub fn with_semester_name(mut self, name: impl Into<String>) -> Self {
        self.semester_name = name.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }
}

/// Output from the AddSemester use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSemesterOutput {
    /// The semester as appended to the student
    pub semester: Semester,
    /// Raw tokens that matched no catalog course, in input order
    pub not_found: Vec<String>,
}

impl AddSemesterOutput {
    /// One [`DomainError::CourseNotFound`] per missed token
    pub fn misses(&self) -> impl Iterator<Item = DomainError> + '_ {
        self.not_found
            .iter()
            .map(|id| DomainError::CourseNotFound(id.clone()))
    }
}

/// Use case for appending a semester to a student
pub struct AddSemesterUseCase<'c> {
    catalog: &'c CourseCatalog,
}

impl<'c> AddSemesterUseCase<'c> {
    pub fn new(catalog: &'c CourseCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog courses the student has not taken in any semester
    pub fn available_courses(
        &self,
        store: &RecordStore,
        student_id: &str,
    ) -> Result<Vec<Course>, DomainError> {
        let student = store.require(student_id)?;
        Ok(self
            .catalog
            .available_for(student)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn execute(
        &self,
        store: &mut RecordStore,
        input: AddSemesterInput,
    ) -> Result<AddSemesterOutput, DomainError> {
        let student = store.require_mut(&input.student_id)?;

        let mut semester = Semester::new(input.semester_name, input.year);
        let mut not_found = Vec::new();

        for token in &input.course_ids {
            let course_id = token.trim();
            match self.catalog.require(course_id) {
                Ok(course) => semester.push_course(course.clone()),
                Err(e) => {
                    warn!("{}", e);
                    not_found.push(token.clone());
                }
            }
        }

        info!(
            "Added semester with {} course(s) to student {} ({} not found)",
            semester.courses.len(),
            input.student_id,
            not_found.len()
        );
        student.attend(semester.clone());

        Ok(AddSemesterOutput {
            semester,
            not_found,
        })
    }
}
