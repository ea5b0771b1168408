//! The in-memory Record Store

use super::entities::Student;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Ordered list of all student records.
///
/// Serializes as a bare JSON array. Student IDs are not deduplicated: every
/// lookup resolves to the first student carrying the ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    students: Vec<Student>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Append a student and return a reference to the stored record
    pub fn add(&mut self, student: Student) -> &Student {
        self.students.push(student);
        &self.students[self.students.len() - 1]
    }

    /// First student whose ID matches exactly
    pub fn find(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    pub fn find_mut(&mut self, student_id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.student_id == student_id)
    }

    /// Like [`find`](Self::find), but a miss is a [`DomainError::StudentNotFound`]
    pub fn require(&self, student_id: &str) -> Result<&Student, DomainError> {
        self.find(student_id)
            .ok_or_else(|| DomainError::StudentNotFound(student_id.to_string()))
    }

    pub fn require_mut(&mut self, student_id: &str) -> Result<&mut Student, DomainError> {
        self.find_mut(student_id)
            .ok_or_else(|| DomainError::StudentNotFound(student_id.to_string()))
    }

    /// Remove the first student whose ID matches and return it
    pub fn remove(&mut self, student_id: &str) -> Result<Student, DomainError> {
        let index = self
            .students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| DomainError::StudentNotFound(student_id.to_string()))?;
        Ok(self.students.remove(index))
    }

    /// Students whose first name starts with "a" or "A", in store order
    pub fn first_name_initial_a(&self) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.first_name_starts_with_a())
            .collect()
    }
}
