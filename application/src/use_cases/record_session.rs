//! Record session use case
//!
//! A [`RecordSession`] owns the in-memory Record Store for the lifetime of the
//! process. It loads the store once when opened and writes it back once on
//! [`save`](RecordSession::save). Nothing is persisted in between.

use crate::ports::student_repository::{StoreError, StudentRepository};
use registrar_domain::{CourseCatalog, RecordStore};
use tracing::info;

/// The Record Store together with its repository and the course catalog
pub struct RecordSession<R: StudentRepository> {
    repository: R,
    catalog: CourseCatalog,
    store: RecordStore,
}

impl<R: StudentRepository> RecordSession<R> {
    /// Load the store from `repository`.
    ///
    /// A corrupt store propagates as [`StoreError::CorruptStore`].
    pub fn open(repository: R, catalog: CourseCatalog) -> Result<Self, StoreError> {
        let store = repository.load()?;
        info!(
            "Loaded {} student(s) from {}",
            store.len(),
            repository.location()
        );
        Ok(Self {
            repository,
            catalog,
            store,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Borrow the store mutably alongside the catalog
    pub fn parts_mut(&mut self) -> (&mut RecordStore, &CourseCatalog) {
        (&mut self.store, &self.catalog)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Write the whole store back through the repository
    pub fn save(&self) -> Result<(), StoreError> {
        self.repository.save(&self.store)?;
        info!(
            "Saved {} student(s) to {}",
            self.store.len(),
            self.repository.location()
        );
        Ok(())
    }
}
