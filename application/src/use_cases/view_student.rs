//! View student use case
//!
//! Returns the full record and, as a side effect, sorts every semester's
//! courses by name in the stored record. The sorted order is what gets saved.

use registrar_domain::{DomainError, RecordStore, Semester, Student};
use tracing::debug;

/// Result of viewing a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStudentOutput {
    /// The record as it was before sorting
    pub record: Student,
    /// Every semester with its courses sorted by name
    pub sorted_semesters: Vec<Semester>,
}

/// Use case for viewing a single student's details
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewStudentUseCase;

impl ViewStudentUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        store: &mut RecordStore,
        student_id: &str,
    ) -> Result<ViewStudentOutput, DomainError> {
        let student = store.require_mut(student_id)?;
        let record = student.clone();

        student.sort_all_courses();
        debug!(
            "Sorted courses of {} semester(s) for student {}",
            student.semesters_attended.len(),
            student_id
        );

        Ok(ViewStudentOutput {
            record,
            sorted_semesters: student.semesters_attended.clone(),
        })
    }
}
