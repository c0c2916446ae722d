//! JSON file persistence for the [`Ledger`].

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::PauseRules;
use crate::error::{EngineError, EngineResult};

use super::Ledger;

/// Reads and writes the ledger as one pretty-printed JSON document.
///
/// Writes go to `<path>.tmp` first and are then renamed over the data file,
/// so a crash mid-write leaves the previous document intact. A failed rename
/// removes the temporary file again.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given data file. Nothing is read yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the ledger, starting an empty one with default rules if the file is missing.
    pub fn load(&self) -> EngineResult<Ledger> {
        self.load_or_init(PauseRules::default())
    }

    /// Loads the ledger, starting an empty one with `rules` if the file is missing.
    ///
    /// An empty file also reads as a fresh ledger. Anything else that is
    /// not a valid ledger document is a `StorageError`.
    pub fn load_or_init(&self, rules: PauseRules) -> EngineResult<Ledger> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No data file yet, starting empty ledger");
                return Ok(Ledger::new(rules));
            }
            Err(err) => return Err(self.storage_error(err)),
        };

        if content.trim().is_empty() {
            return Ok(Ledger::new(rules));
        }

        let ledger: Ledger = serde_json::from_str(&content).map_err(|e| self.storage_error(e))?;
        debug!(
            path = %self.path.display(),
            employees = ledger.employees().len(),
            "Ledger loaded"
        );
        Ok(ledger)
    }

    /// Writes the ledger atomically.
    pub fn save(&self, ledger: &Ledger) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(ledger).map_err(|e| self.storage_error(e))?;
        let tmp = self.tmp_path();

        fs::write(&tmp, json).map_err(|e| self.storage_error(e))?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temporary data file");
            }
            return Err(self.storage_error(err));
        }

        debug!(path = %self.path.display(), "Ledger saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = OsString::from(self.path.as_os_str());
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn storage_error(&self, err: impl std::fmt::Display) -> EngineError {
        EngineError::StorageError {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayEntry, EmployeeDraft, WeekKey, WeekRecord, WorkWeekday};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("worktime_data.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_gives_empty_ledger_with_given_rules() {
        let (_dir, store) = create_test_store();
        let rules = PauseRules {
            threshold_minutes: 480,
            ..PauseRules::default()
        };

        let ledger = store.load_or_init(rules.clone()).unwrap();
        assert!(ledger.employees().is_empty());
        assert_eq!(ledger.settings(), &rules);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_restores_ledger() {
        let (_dir, store) = create_test_store();
        let mut ledger = Ledger::default();
        let id = ledger
            .add_employee(EmployeeDraft {
                name: "Mia".to_string(),
                weekly_target_minutes: 2310,
                active: true,
                balance_minutes: 0,
            })
            .unwrap()
            .id;
        let week = WeekRecord::default().with_day(WorkWeekday::Monday, DayEntry::workday("08:00", "12:00"));
        ledger
            .save_week(WeekKey::new(2026, 3).unwrap(), vec![(id, week)])
            .unwrap();

        store.save(&ledger).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, ledger);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_saved_document_uses_week_keys() {
        let (_dir, store) = create_test_store();
        let mut ledger = Ledger::default();
        let id = ledger
            .add_employee(EmployeeDraft {
                name: "Mia".to_string(),
                weekly_target_minutes: 0,
                active: true,
                balance_minutes: 0,
            })
            .unwrap()
            .id;
        ledger
            .put_week_record(&id, WeekKey::new(2026, 3).unwrap(), WeekRecord::default())
            .unwrap();

        store.save(&ledger).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"2026-03\""));
        assert!(raw.contains("\"monday\""));
    }

    #[test]
    fn test_empty_file_gives_empty_ledger() {
        let (_dir, store) = create_test_store();
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().employees().is_empty());
    }

    #[test]
    fn test_malformed_file_is_storage_error() {
        let (_dir, store) = create_test_store();
        fs::write(store.path(), "{ not json").unwrap();

        match store.load() {
            Err(EngineError::StorageError { path, .. }) => {
                assert!(path.ends_with("worktime_data.json"));
            }
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }

    #[test]
    fn test_save_into_missing_directory_is_storage_error() {
        let (dir, _) = create_test_store();
        let store = JsonFileStore::new(dir.path().join("missing").join("data.json"));
        assert!(matches!(
            store.save(&Ledger::default()),
            Err(EngineError::StorageError { .. })
        ));
    }

    #[test]
    fn test_failed_rename_removes_temporary_file() {
        let (_dir, store) = create_test_store();
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("occupied"), "x").unwrap();

        match store.save(&Ledger::default()) {
            Err(EngineError::StorageError { path, .. }) => {
                assert!(path.ends_with("worktime_data.json"));
            }
            other => panic!("Expected StorageError, got {:?}", other),
        }
        assert!(!store.tmp_path().exists());
        assert!(store.path().join("occupied").exists());
    }
}
