//! Key-value persistence for session values
//!
//! The store holds three string keys: [`KEY_TOKEN`], [`KEY_USER_ID`] and
//! [`KEY_USER`]. [`FileStore`] keeps them in a flat JSON object on disk and
//! rewrites the whole file on every change (temp file + rename).

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use shopdesk_core::prelude::*;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_USER: &str = "user";

/// Get/set/remove of string values by key.
pub trait KeyValueStore: Send + fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────
// File Store
// ─────────────────────────────────────────────────────────────────

/// JSON object file, e.g. `{"token": "...", "userId": "42", "user": "{...}"}`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            debug!("No session file at {:?}, starting empty", path);
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::store(&path, format!("Failed to read: {}", e)))?;

        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable session file {:?}: {}", path, e);
                BTreeMap::new()
            }
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::store(&self.path, "Session file has no parent directory"))?;

        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::store(&self.path, format!("Failed to create dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.json".to_string());
        let temp_path = dir.join(format!(".{}.tmp", file_name));

        // Atomic write: write to temp, then rename
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::store(&self.path, format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::store(&self.path, format!("Failed to rename temp file: {}", e)))?;

        trace!("Persisted session file {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// Memory Store
// ─────────────────────────────────────────────────────────────────

/// Non-persistent store, used when no session file is wanted and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("session.json")).unwrap();
        assert_eq!(store.get(KEY_TOKEN), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(KEY_TOKEN, "abc").unwrap();
        store.set(KEY_USER_ID, "42").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(KEY_TOKEN), Some("abc".to_string()));
        assert_eq!(reopened.get(KEY_USER_ID), Some("42".to_string()));
    }

    #[test]
    fn test_file_store_writes_json_object_with_named_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(KEY_USER, r#"{"id":1}"#).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["user"], r#"{"id":1}"#);
        assert!(!dir.path().join(".session.json.tmp").exists());
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(KEY_TOKEN, "abc").unwrap();
        store.remove(KEY_TOKEN).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(KEY_TOKEN), None);
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(KEY_TOKEN), None);

        store.set(KEY_TOKEN, "fresh").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(KEY_TOKEN), Some("fresh".to_string()));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set(KEY_TOKEN, "abc").unwrap();
        assert_eq!(store.get(KEY_TOKEN), Some("abc".to_string()));
        store.remove(KEY_TOKEN).unwrap();
        assert_eq!(store.get(KEY_TOKEN), None);
    }
}
