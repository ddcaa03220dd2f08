use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Slot holding the JSON array of tasks
pub const TASKS_KEY: &str = "todos";
/// Slot holding the JSON array of category names
pub const CATEGORIES_KEY: &str = "categories";

/// Error type for storage slot I/O
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A string-keyed store of whole serialized values.
///
/// `save` always replaces the slot; there is no merge and no partial write.
pub trait KeyValueStore {
    /// Previously saved value, or `None` if the slot was never written
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Slots stored as `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadError { path, source: e }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let result = fs::create_dir_all(&self.dir).and_then(|_| atomic_write(&path, value.as_bytes()));
        if let Err(e) = result {
            log::error!("write of slot {} failed: {}", key, e);
            return Err(StorageError::WriteError { path, source: e });
        }
        Ok(())
    }
}

/// In-memory slots. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, as if an earlier session had saved it
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_missing_slot_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(store.load(TASKS_KEY).unwrap().is_none());
    }

    #[test]
    fn file_store_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.save(CATEGORIES_KEY, r#"["仕事","その他"]"#).unwrap();
        assert_eq!(
            store.load(CATEGORIES_KEY).unwrap().as_deref(),
            Some(r#"["仕事","その他"]"#)
        );
        assert!(tmp.path().join("categories.json").exists());
    }

    #[test]
    fn file_store_save_replaces_whole_value() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp.path());
        store.save(TASKS_KEY, "[1,2,3,4,5,6,7,8]").unwrap();
        store.save(TASKS_KEY, "[]").unwrap();
        assert_eq!(store.load(TASKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let mut store = FileStore::new(&dir);
        store.save(TASKS_KEY, "[]").unwrap();
        assert!(dir.join("todos.json").exists());
    }

    #[test]
    fn file_store_write_into_a_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut store = FileStore::new(&blocker);
        let err = store.save(TASKS_KEY, "[]").unwrap_err();
        assert!(matches!(err, StorageError::WriteError { .. }));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new().with_slot(TASKS_KEY, "[]");
        assert_eq!(store.load(TASKS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(store.load(CATEGORIES_KEY).unwrap().is_none());
        store.save(CATEGORIES_KEY, "[\"a\"]").unwrap();
        assert_eq!(
            store.load(CATEGORIES_KEY).unwrap().as_deref(),
            Some("[\"a\"]")
        );
    }
}
