//! JSON file student repository
//!
//! Stores the whole Record Store as one pretty-printed JSON array.
//!
//! # Save strategy
//!
//! With `atomic_write` enabled the JSON is written to `<file>.tmp` next to the
//! target and renamed over it, so an interrupted save keeps the previous file.
//! Otherwise the target is overwritten in place.

use registrar_application::{PersistenceSettings, StoreError, StudentRepository};
use registrar_domain::RecordStore;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Repository backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStudentRepository {
    settings: PersistenceSettings,
}

impl JsonFileStudentRepository {
    pub fn new(settings: PersistenceSettings) -> Self {
        Self { settings }
    }

    /// Repository at `path` with default settings
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(PersistenceSettings::default().with_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.settings.path
    }

    pub fn settings(&self) -> &PersistenceSettings {
        &self.settings
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::PersistenceIo {
            path: self.settings.path.clone(),
            source,
        }
    }

    /// Sibling temp file used for atomic saves
    fn temp_path(&self) -> PathBuf {
        let path = &self.settings.path;
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("students.json"));
        name.push(".tmp");
        path.with_file_name(name)
    }

    fn write_atomic(&self, content: &str) -> io::Result<()> {
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        if let Err(e) = fs::rename(&temp, &self.settings.path) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        Ok(())
    }
}

impl StudentRepository for JsonFileStudentRepository {
    fn load(&self) -> Result<RecordStore, StoreError> {
        let path = &self.settings.path;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No record file at {}, starting empty", path.display());
                return Ok(RecordStore::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|e| {
            warn!("Failed to parse record file {}: {}", path.display(), e);
            StoreError::CorruptStore {
                path: path.clone(),
                source: Box::new(e),
            }
        })
    }

    fn save(&self, store: &RecordStore) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(store).map_err(|e| self.io_error(io::Error::from(e)))?;

        if let Some(parent) = self.settings.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let result = if self.settings.atomic_write {
            self.write_atomic(&content)
        } else {
            fs::write(&self.settings.path, &content)
        };
        result.map_err(|e| self.io_error(e))?;

        debug!(
            "Wrote {} bytes to {}",
            content.len(),
            self.settings.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.settings.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_domain::{Course, Degree, Department, Semester, Student};
    use tempfile::tempdir;

    fn sample_store() -> RecordStore {
        let mut alice = Student::new("Alice", "Rahman", "001", "22", Department::Cse, Degree::Bsc)
            .with_middle_name("J");
        alice.attend(
            Semester::new("Spring", "2024").with_courses(vec![
                Course::new("ENG 201", "English Literature", "Prof. Johnson", 4),
                Course::new("CSC 101", "Introduction to Computer Science", "Prof. Smith", 3),
            ]),
        );
        alice.attend(Semester::default());
        let bob = Student::new("Bob", "Khan", "002", "23", Department::Eee, Degree::Msc);
        RecordStore::from_students(vec![alice, bob])
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let repo = JsonFileStudentRepository::at(dir.path().join("students.json"));
        let store = repo.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let repo = JsonFileStudentRepository::at(dir.path().join("students.json"));
        let store = sample_store();

        repo.save(&store).unwrap();
        let loaded = repo.load().unwrap();
        assert_eq!(loaded, store);
        assert_eq!(
            loaded.students()[0].semesters_attended[0].courses[0].course_id,
            "ENG 201"
        );
    }

    #[test]
    fn test_saved_file_is_pretty_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        JsonFileStudentRepository::at(&path)
            .save(&sample_store())
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"StudentID\": \"001\""));
        assert!(content.contains("\"Department\": \"CSE\""));
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        let repo = JsonFileStudentRepository::at(&path);

        repo.save(&sample_store()).unwrap();
        repo.save(&RecordStore::new()).unwrap();

        assert!(!dir.path().join("students.json.tmp").exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_plain_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(&path, "[]").unwrap();

        let repo = JsonFileStudentRepository::new(
            PersistenceSettings::default()
                .with_path(&path)
                .with_atomic_write(false),
        );
        repo.save(&sample_store()).unwrap();
        assert_eq!(repo.load().unwrap().len(), 2);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("students.json");
        let repo = JsonFileStudentRepository::at(&path);
        repo.save(&sample_store()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_corrupt_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(&path, "{ this is not a student list").unwrap();

        let err = JsonFileStudentRepository::at(&path).load().unwrap_err();
        assert!(err.is_corrupt());
        match err {
            StoreError::CorruptStore { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_corrupt_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(&path, r#"[{"FirstName": "Alice", "Department": "LAW", "Degree": "BSC"}]"#)
            .unwrap();

        let err = JsonFileStudentRepository::at(&path).load().unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_load_legacy_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(
            &path,
            r#"[
  {
    "FirstName": "amit",
    "MiddleName": "",
    "LastName": "Das",
    "StudentID": "007",
    "JoiningBatch": "21",
    "Department": 0,
    "Degree": 2,
    "SemestersAttended": [
      {
        "SemesterName": null,
        "Year": null,
        "Courses": [
          {
            "CourseID": "ENG 201",
            "CourseName": "English Literature",
            "TeacherName": "Prof. Johnson",
            "TotalCredits": 4
          }
        ]
      }
    ]
  }
]"#,
        )
        .unwrap();

        let store = JsonFileStudentRepository::at(&path).load().unwrap();
        let amit = store.find("007").unwrap();
        assert_eq!(amit.department, Department::Cse);
        assert_eq!(amit.degree, Degree::Msc);
        assert_eq!(amit.middle_name.as_deref(), Some(""));
        assert_eq!(amit.semesters_attended[0].semester_name, "");
        assert!(amit.has_taken("ENG 201"));
    }

    #[test]
    fn test_unreadable_path_is_io_failure() {
        let dir = tempdir().unwrap();
        // A directory cannot be read as a file
        let err = JsonFileStudentRepository::at(dir.path()).load().unwrap_err();
        assert!(matches!(err, StoreError::PersistenceIo { .. }));
    }
}
