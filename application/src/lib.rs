//! Application layer for student-registrar
//!
//! This crate contains the record operations (use cases), the persistence
//! port, and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PersistenceSettings;
pub use ports::student_repository::{InMemoryStudentRepository, StoreError, StudentRepository};
pub use use_cases::add_semester::{AddSemesterInput, AddSemesterOutput, AddSemesterUseCase};
pub use use_cases::add_student::{AddStudentInput, AddStudentUseCase};
pub use use_cases::delete_student::DeleteStudentUseCase;
pub use use_cases::list_students::ListStudentsUseCase;
pub use use_cases::record_session::RecordSession;
pub use use_cases::view_student::{ViewStudentOutput, ViewStudentUseCase};
