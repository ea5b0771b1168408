//! Record Store persistence adapters
//!
//! - [`JsonFileStudentRepository`]: whole-store JSON file implementation of
//!   [`StudentRepository`](registrar_application::StudentRepository)

mod json_repository;

pub use json_repository::JsonFileStudentRepository;
