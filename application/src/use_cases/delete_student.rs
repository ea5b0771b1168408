//! Delete student use case

use registrar_domain::{DomainError, RecordStore, Student};
use tracing::info;

/// Use case for removing a student from the Record Store
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteStudentUseCase;

impl DeleteStudentUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Remove the first student with `student_id`, returning the removed record
    pub fn execute(
        &self,
        store: &mut RecordStore,
        student_id: &str,
    ) -> Result<Student, DomainError> {
        let removed = store.remove(student_id)?;
        info!(
            "Deleted student {} ({})",
            removed.student_id,
            removed.display_name()
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_domain::{Degree, Department};

    #[test]
    fn test_delete_then_find() {
        let mut store = RecordStore::from_students(vec![
            Student::new("Alice", "Rahman", "001", "22", Department::Cse, Degree::Bsc),
            Student::new("Bob", "Khan", "002", "22", Department::Eee, Degree::Msc),
        ]);

        let removed = DeleteStudentUseCase::new()
            .execute(&mut store, "001")
            .unwrap();
        assert_eq!(removed.first_name, "Alice");
        assert!(store.find("001").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_missing_student() {
        let mut store = RecordStore::new();
        let err = DeleteStudentUseCase::new()
            .execute(&mut store, "001")
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
