//! Student repository port
//!
//! Defines how the Record Store is loaded at startup and written back at exit.
//! Persistence is whole-store: there are no partial reads or writes.

use registrar_domain::RecordStore;
use std::cell::RefCell;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the Record Store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file exists but is not a valid JSON array of students.
    #[error("Record store {} is corrupt: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading or writing the store file failed.
    #[error("Record store {} I/O failure: {source}", .path.display())]
    PersistenceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Check if this error is a deserialization failure
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::CorruptStore { .. })
    }
}

/// Repository for the Record Store
///
/// Implementations live in the infrastructure layer.
pub trait StudentRepository {
    /// Load every student.
    ///
    /// A missing backing file yields an empty store, not an error.
    fn load(&self) -> Result<RecordStore, StoreError>;

    /// Replace the persisted store with `store`.
    fn save(&self, store: &RecordStore) -> Result<(), StoreError>;

    /// Human-readable location of the backing store (for logs and messages)
    fn location(&self) -> String;
}

/// Repository that keeps the store in memory.
///
/// Used by tests and dry runs. `save` replaces the held copy.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    stored: RefCell<Option<RecordStore>>,
    saves: RefCell<usize>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing store, as if it had been saved previously
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            stored: RefCell::new(Some(store)),
            saves: RefCell::new(0),
        }
    }

    /// The most recently saved (or seeded) store
    pub fn stored(&self) -> Option<RecordStore> {
        self.stored.borrow().clone()
    }

    /// How many times `save` was called
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn load(&self) -> Result<RecordStore, StoreError> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, store: &RecordStore) -> Result<(), StoreError> {
        *self.stored.borrow_mut() = Some(store.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

impl<R: StudentRepository + ?Sized> StudentRepository for &R {
    fn load(&self) -> Result<RecordStore, StoreError> {
        (**self).load()
    }

    fn save(&self, store: &RecordStore) -> Result<(), StoreError> {
        (**self).save(store)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
