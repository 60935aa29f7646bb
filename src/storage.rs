//! Persistence: the key-value store seam and the repository that maps
//! tracker state onto its two keys

use crate::constants::{ENTRIES_KEY, GOAL_KEY};
use crate::db::Database;
use crate::types::WeightEntry;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("failed to encode entries: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value storage. Implemented by the SQLite [`Database`](crate::db::Database)
/// and by [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store. Clones share the same map, so a test can keep a handle
/// and inspect what the repository wrote.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store whose writes always fail, for exercising save error paths
#[cfg(test)]
pub(crate) struct ReadOnlyStore;

#[cfg(test)]
impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Database(rusqlite::Error::InvalidQuery))
    }
}

/// Open the SQLite store, falling back to memory so the session still works
pub fn open_repository(db_path: &Path) -> Repository {
    match Database::open(db_path) {
        Ok(db) => {
            info!(path = %db_path.display(), "Database opened");
            Repository::new(db)
        }
        Err(e) => {
            error!(error = %e, path = %db_path.display(), "Failed to open database, changes will not be saved");
            Repository::new(MemoryStore::default())
        }
    }
}

/// Tracker state as read back from the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredState {
    pub entries: Vec<WeightEntry>,
    pub goal: Option<f64>,
}

pub struct Repository {
    store: Box<dyn KeyValueStore>,
}

impl Repository {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Read entries and goal. Unreadable or malformed values are logged and
    /// treated as absent.
    pub fn load(&self) -> StoredState {
        StoredState {
            entries: self.load_entries(),
            goal: self.load_goal(),
        }
    }

    fn load_entries(&self) -> Vec<WeightEntry> {
        match self.store.get(ENTRIES_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<WeightEntry>>(&json) {
                Ok(entries) => {
                    debug!(count = entries.len(), "Entries loaded");
                    entries
                }
                Err(e) => {
                    warn!(error = %e, "Stored entries are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored entries");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read entries");
                Vec::new()
            }
        }
    }

    fn load_goal(&self) -> Option<f64> {
        match self.store.get(GOAL_KEY) {
            Ok(Some(raw)) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                match raw.parse::<f64>() {
                    Ok(goal) if goal.is_finite() => Some(goal),
                    _ => {
                        warn!(value = raw, "Stored goal is not a number, ignoring");
                        None
                    }
                }
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read goal");
                None
            }
        }
    }

    pub fn save_entries(&self, entries: &[WeightEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(ENTRIES_KEY, &json)?;
        debug!(count = entries.len(), "Entries saved");
        Ok(())
    }

    /// An unset goal is stored as an empty string.
    pub fn save_goal(&self, goal: Option<f64>) -> Result<(), StorageError> {
        let raw = goal.map(|g| g.to_string()).unwrap_or_default();
        self.store.set(GOAL_KEY, &raw)?;
        debug!(goal = %raw, "Goal saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: i64, date: &str, weight: f64, notes: &str) -> WeightEntry {
        WeightEntry {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            weight,
            notes: notes.to_string(),
        }
    }

    #[test]
    fn unopenable_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("missing").join("weight-tracker.db");

        let repo = open_repository(&db_path);
        repo.save_entries(&[entry(1, "2024-01-01", 80.0, "")]).unwrap();
        repo.save_goal(Some(70.0)).unwrap();

        let state = repo.load();
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.goal, Some(70.0));
        assert!(!db_path.exists());
    }

    #[test]
    fn openable_database_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("weight-tracker.db");

        open_repository(&db_path).save_goal(Some(72.0)).unwrap();

        assert!(db_path.exists());
        assert_eq!(open_repository(&db_path).load().goal, Some(72.0));
    }

    #[test]
    fn empty_store_loads_default_state() {
        let repo = Repository::new(MemoryStore::default());
        assert_eq!(repo.load(), StoredState::default());
    }

    #[test]
    fn saved_state_loads_back() {
        let store = MemoryStore::default();
        let repo = Repository::new(store.clone());
        let entries = vec![
            entry(1, "2024-01-01", 80.0, ""),
            entry(2, "2024-01-08", 78.4, "after holidays"),
        ];

        repo.save_entries(&entries).unwrap();
        repo.save_goal(Some(70.5)).unwrap();

        let reloaded = Repository::new(store).load();
        assert_eq!(reloaded.entries, entries);
        assert_eq!(reloaded.goal, Some(70.5));
    }

    #[test]
    fn entries_are_stored_as_json_under_entries_key() {
        let store = MemoryStore::default();
        let repo = Repository::new(store.clone());
        repo.save_entries(&[entry(1704067200000, "2024-01-01", 80.0, "x")])
            .unwrap();

        let raw = store.get(ENTRIES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 1704067200000_i64);
        assert_eq!(value[0]["date"], "2024-01-01");
        assert_eq!(value[0]["weight"], 80.0);
        assert_eq!(value[0]["notes"], "x");
    }

    #[test]
    fn reads_integer_weights_and_missing_notes() {
        let store = MemoryStore::default();
        store
            .set(
                ENTRIES_KEY,
                r#"[{"id":1704067200000,"date":"2024-01-01","weight":80}]"#,
            )
            .unwrap();

        let state = Repository::new(store).load();
        assert_eq!(state.entries, vec![entry(1704067200000, "2024-01-01", 80.0, "")]);
    }

    #[test]
    fn malformed_entries_load_as_empty() {
        let store = MemoryStore::default();
        store.set(ENTRIES_KEY, "not json").unwrap();
        assert!(Repository::new(store).load().entries.is_empty());
    }

    #[test]
    fn cleared_goal_is_stored_as_empty_string() {
        let store = MemoryStore::default();
        let repo = Repository::new(store.clone());
        repo.save_goal(None).unwrap();

        assert_eq!(store.get(GOAL_KEY).unwrap().as_deref(), Some(""));
        assert_eq!(repo.load().goal, None);
    }

    #[test]
    fn non_numeric_goal_is_ignored() {
        let store = MemoryStore::default();
        store.set(GOAL_KEY, "seventy").unwrap();
        assert_eq!(Repository::new(store).load().goal, None);
    }

    #[test]
    fn sqlite_backed_repository_round_trips() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tracker.db");
        let entries = vec![entry(5, "2024-03-02", 91.2, "")];
        {
            let repo = Repository::new(crate::db::Database::open(&path).unwrap());
            repo.save_entries(&entries).unwrap();
            repo.save_goal(Some(85.0)).unwrap();
        }

        let state = Repository::new(crate::db::Database::open(&path).unwrap()).load();
        assert_eq!(state.entries, entries);
        assert_eq!(state.goal, Some(85.0));
    }
}
