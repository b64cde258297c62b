//! Persistence boundary for the onboarding record.
//!
//! The session talks to storage only through [`RecordStore`]. The file
//! implementation writes the record verbatim as JSON under a fixed storage
//! key inside the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorynestError};
use crate::onboarding::OnboardingRecord;

/// File name the record is stored under.
pub const STORAGE_KEY: &str = "onboarding-data.json";

/// Durable storage for the onboarding record.
pub trait RecordStore {
    /// Load the stored record. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<OnboardingRecord>>;

    /// Persist the record, replacing whatever was stored.
    fn save(&self, record: &OnboardingRecord) -> Result<()>;

    /// Wipe stored state back to "never started".
    fn clear(&self) -> Result<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load(&self) -> Result<Option<OnboardingRecord>> {
        (**self).load()
    }

    fn save(&self, record: &OnboardingRecord) -> Result<()> {
        (**self).save(record)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load(&self) -> Result<Option<OnboardingRecord>> {
        (**self).load()
    }

    fn save(&self, record: &OnboardingRecord) -> Result<()> {
        (**self).save(record)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Parse a stored record.
pub fn parse_record(content: &str, path: &Path) -> Result<OnboardingRecord> {
    serde_json::from_str(content).map_err(|e| StorynestError::RecordParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// JSON file storage.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    /// Store the record at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the record under [`STORAGE_KEY`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORAGE_KEY))
    }

    /// The record file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> Result<Option<OnboardingRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        parse_record(&content, &self.path).map(Some)
    }

    /// Save using write-to-temp-then-rename so a crash mid-write never
    /// leaves a partially written record behind.
    fn save(&self, record: &OnboardingRecord) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize onboarding record: {}", e))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved onboarding record to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::Field;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_none() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        let record = OnboardingRecord::new()
            .with(Field::ChildName, "Emma")
            .with(Field::Goals, vec!["bedtime"]);

        store.save(&record).unwrap();

        assert_eq!(store.load().unwrap(), Some(record));
        assert!(temp.path().join(STORAGE_KEY).exists());
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(&temp.path().join("nested").join("data"));
        store.save(&OnboardingRecord::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        store.save(&OnboardingRecord::new()).unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        fs::write(store.path(), "{ \"childName\": ").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StorynestError::RecordParse { .. }));
    }

    #[test]
    fn load_non_object_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn clear_removes_file() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        store.save(&OnboardingRecord::new()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_missing_file_is_ok() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        store.clear().unwrap();
    }

    #[test]
    fn saved_file_is_flat_camel_case_json() {
        let temp = TempDir::new().unwrap();
        let store = FileRecordStore::in_dir(temp.path());
        store
            .save(&OnboardingRecord::new().with(Field::ChildAge, "4-5"))
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        insta::assert_snapshot!(content, @r#"
        {
          "childAge": "4-5"
        }
        "#);
    }
}
