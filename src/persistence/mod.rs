//! Persistent key-value storage for the max-score scalar
//!
//! The contract is deliberately tiny: `get`/`set` of string values, both
//! fallible. Callers treat any failure as "value absent / write dropped"
//! and log it; nothing in the simulation core ever touches storage.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Storage failure taxonomy: I/O, or a backing file that no longer parses
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Corrupt(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage i/o error: {e}"),
            StoreError::Corrupt(e) => write!(f, "storage file corrupt: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Corrupt(e)
    }
}

/// String key-value storage, fire-and-forget from the host's point of view
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Single JSON file under the platform data directory
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the default store (`<data dir>/sky-flap/store.json`)
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sky-flap");
        Self::open(dir.join("store.json"))
    }

    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is rebuilt rather than propagated; the scores it
        // held are already lost
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_owned(), value.to_owned());
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileStore {
        let path = std::env::temp_dir()
            .join("sky-flap-tests")
            .join(format!("{}-{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        FileStore::open(path).unwrap()
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("max_score").unwrap(), None);

        store.set("max_score", "12").unwrap();
        assert_eq!(store.get("max_score").unwrap().as_deref(), Some("12"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let mut store = temp_store("round-trip");
        assert_eq!(store.get("max_score").unwrap(), None);

        store.set("max_score", "15").unwrap();
        assert_eq!(store.get("max_score").unwrap().as_deref(), Some("15"));

        // A second handle on the same path sees the value
        let reopened = FileStore::open(store.path.clone()).unwrap();
        assert_eq!(reopened.get("max_score").unwrap().as_deref(), Some("15"));
    }

    #[test]
    fn test_file_store_recovers_from_corrupt_file() {
        let mut store = temp_store("corrupt");
        fs::write(&store.path, "not json at all").unwrap();

        assert!(store.get("max_score").is_err());
        // Writing rebuilds the file from scratch
        store.set("max_score", "3").unwrap();
        assert_eq!(store.get("max_score").unwrap().as_deref(), Some("3"));
    }
}
