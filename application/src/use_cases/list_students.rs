//! List students use case
//!
//! The listing is fixed to students whose first name starts with "a" (either
//! case). It is not a general filter.

use registrar_domain::{RecordStore, Student};
use tracing::debug;

/// Use case for the filtered student listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ListStudentsUseCase;

impl ListStudentsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<'s>(&self, store: &'s RecordStore) -> Vec<&'s Student> {
        let matches = store.first_name_initial_a();
        debug!("{} of {} students listed", matches.len(), store.len());
        matches
    }
}
