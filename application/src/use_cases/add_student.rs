//! Add student use case
//!
//! Parses the department and degree tokens, then appends a new record with an
//! empty semester history. Duplicate student IDs are accepted.

use registrar_domain::{Degree, Department, DomainError, RecordStore, Student};
use tracing::{info, warn};

/// Raw field values for a new student, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddStudentInput {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub student_id: String,
    pub joining_batch: String,
    /// Department token, one of CSE / BBA / EEE
    pub department: String,
    /// Degree token, one of BSC / BBA / MSC
    pub degree: String,
}

impl AddStudentInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        student_id: impl Into<String>,
        joining_batch: impl Into<String>,
        department: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_name: String::new(),
            last_name: last_name.into(),
            student_id: student_id.into(),
            joining_batch: joining_batch.into(),
            department: department.into(),
            degree: degree.into(),
        }
    }

    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = middle_name.into();
        self
    }

    /// Parse the enum tokens and build the record.
    ///
    /// Fails on the first unrecognized token; nothing is built in that case.
    pub fn into_student(self) -> Result<Student, DomainError> {
        let department: Department = self.department.parse()?;
        let degree: Degree = self.degree.parse()?;

        Ok(Student::new(
            self.first_name,
            self.last_name,
            self.student_id,
            self.joining_batch,
            department,
            degree,
        )
        .with_middle_name(self.middle_name))
    }
}

/// Use case for appending a new student to the Record Store
#[derive(Debug, Clone, Copy, Default)]
pub struct AddStudentUseCase;

impl AddStudentUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Add the student described by `input`.
    ///
    /// On [`DomainError::InvalidEnumValue`] the store is left unchanged.
    pub fn execute<'s>(
        &self,
        store: &'s mut RecordStore,
        input: AddStudentInput,
    ) -> Result<&'s Student, DomainError> {
        let student = input.into_student().inspect_err(|e| {
            warn!("Rejected new student: {}", e);
        })?;

        if store.find(&student.student_id).is_some() {
            // IDs are not unique; later lookups only see the earlier record
            warn!("Student ID {} already present in store", student.student_id);
        }

        info!(
            "Added student {} ({})",
            student.student_id,
            student.display_name()
        );
        Ok(store.add(student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(department: &str, degree: &str) -> AddStudentInput {
        AddStudentInput::new("Alice", "Rahman", "001", "22", department, degree)
    }

    #[test]
    fn test_add_then_find() {
        let mut store = RecordStore::new();
        let added = AddStudentUseCase::new()
            .execute(&mut store, input("CSE", "BSC").with_middle_name("J"))
            .unwrap();

        assert_eq!(added.student_id, "001");
        assert_eq!(added.middle_name.as_deref(), Some("J"));
        assert!(added.semesters_attended.is_empty());

        let found = store.find("001").unwrap();
        assert_eq!(found.department, Department::Cse);
        assert_eq!(found.degree, Degree::Bsc);
    }

    #[test]
    fn test_invalid_department_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        let err = AddStudentUseCase::new()
            .execute(&mut store, input("XYZ", "BSC"))
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidEnumValue {
                field: "department",
                ..
            }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_degree_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        let err = AddStudentUseCase::new()
            .execute(&mut store, input("EEE", "PHD"))
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidEnumValue { field: "degree", .. }
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_id_accepted() {
        let mut store = RecordStore::new();
        let use_case = AddStudentUseCase::new();
        use_case.execute(&mut store, input("CSE", "BSC")).unwrap();
        use_case.execute(&mut store, input("BBA", "BBA")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find("001").unwrap().department, Department::Cse);
    }

    #[test]
    fn test_blank_middle_name_stored_as_absent() {
        let mut store = RecordStore::new();
        let added = AddStudentUseCase::new()
            .execute(&mut store, input("CSE", "MSC"))
            .unwrap();
        assert_eq!(added.middle_name, None);
        assert_eq!(added.degree, Degree::Msc);
    }

    #[test]
    fn test_lowercase_tokens_rejected() {
        let mut store = RecordStore::new();
        let err = AddStudentUseCase::new()
            .execute(&mut store, input("cse", "bsc"))
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::InvalidEnumValue {
                field: "department",
                value: "cse".to_string(),
                expected: &["CSE", "BBA", "EEE"],
            }
        );
        assert!(store.is_empty());
    }
}
