//! Synchronous string key-value persistence
//!
//! The store never talks to disk directly; it goes through [`KeyValueStore`].
//! Two backends ship here:
//!
//! - [`MemoryStore`]: process-local, with write counting and injectable
//!   write failures for tests
//! - [`FileStore`]: one `<key>.json` file per key inside a directory

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::error::PersistenceError;

/// Key under which the favorites array is stored
pub const FAVORITES_KEY: &str = "favorites";

/// Key under which the reviews object is stored
pub const REVIEWS_KEY: &str = "reviews";

/// Synchronous string-keyed storage
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// In-memory backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a write
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Number of successful `set` calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every subsequent `set` fail (or succeed again)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Rejected(format!(
                "writes disabled (key `{key}`)"
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Directory-backed store: each key lives in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl FileStore {
    /// Open (creating if needed) the storage directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| PersistenceError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        if !is_valid_key(key) {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).map_err(|source| PersistenceError::Io {
            path: tmp.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&tmp, &path) {
            if let Err(err) = fs::remove_file(&tmp) {
                warn!("FileStore::set - could not remove {}: {}", tmp.display(), err);
            }
            return Err(PersistenceError::Io { path, source });
        }

        trace!("FileStore::set {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_counts_and_rejects_writes() {
        let mut store = MemoryStore::new().with_value("favorites", "[1]");
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.writes(), 0);

        store.set("favorites", "[1,2]").unwrap();
        assert_eq!(store.writes(), 1);

        store.fail_writes(true);
        assert!(matches!(
            store.set("favorites", "[]"),
            Err(PersistenceError::Rejected(_))
        ));
        assert_eq!(store.value("favorites"), Some("[1,2]"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn file_store_round_trips_and_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("state")).unwrap();

        assert_eq!(store.get("reviews").unwrap(), None);
        store.set("reviews", r#"{"7":["great"]}"#).unwrap();
        assert_eq!(
            store.get("reviews").unwrap().as_deref(),
            Some(r#"{"7":["great"]}"#)
        );
        assert!(store.dir().join("reviews.json").exists());
        assert!(!store.dir().join("reviews.json.tmp").exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        // A non-empty directory where the value file should go blocks the rename.
        let blocker = store.dir().join("favorites.json");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        assert!(matches!(
            store.set("favorites", "[1]"),
            Err(PersistenceError::Io { .. })
        ));
        assert!(!store.dir().join("favorites.json.tmp").exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(PersistenceError::InvalidKey(_))
            ));
        }
    }
}
