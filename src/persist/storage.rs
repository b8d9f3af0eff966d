//! Durable key/value storage backends.
//!
//! Values are opaque JSON strings at this layer; typing and defaults live in
//! [`PersistentValue`](crate::persist::PersistentValue).

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors raised by a storage backend.
///
/// These never reach screens: `PersistentValue` logs and swallows them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON for key '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage unavailable")]
    Unavailable,

    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: u64, quota: u64 },

    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },
}

/// A durable string slot store.
pub trait DurableStorage: Send + Sync {
    /// Raw stored JSON for `key`, or `None` if never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, json: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Lock file serializing writers of one storage directory.
const LOCK_FILE: &str = ".storage.lock";

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    quota: Option<u64>,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota: None,
        }
    }

    /// Default state directory: `<data_dir>/dealerdesk`.
    pub fn default_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("dealerdesk")
    }

    /// Reject writes that would push the directory past `bytes`.
    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
        move |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Bytes used by every stored value except `exclude`.
    fn used_bytes(&self, exclude: &Path) -> Result<u64, StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Self::io_err(&self.dir)(e)),
        };
        let mut total = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path == exclude || path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            total += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
        Ok(total)
    }

    /// Quota check and atomic replace. Caller holds the directory lock.
    fn write_locked(&self, key: &str, path: &Path, json: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes(path)? + json.len() as u64;
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        let tmp_path = self.dir.join(format!(".{key}.tmp"));
        let mut tmp = File::create(&tmp_path).map_err(Self::io_err(&tmp_path))?;
        tmp.write_all(json.as_bytes())
            .map_err(Self::io_err(&tmp_path))?;
        tmp.sync_all().map_err(Self::io_err(&tmp_path))?;
        fs::rename(&tmp_path, path).map_err(Self::io_err(path))
    }
}

impl DurableStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(&path)(e)),
        }
    }

    fn write(&self, key: &str, json: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(Self::io_err(&self.dir))?;

        // Writers of every key share one lock; the quota spans the directory.
        let lock_path = self.dir.join(LOCK_FILE);
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(Self::io_err(&lock_path))?;
        lock.lock_exclusive().map_err(Self::io_err(&lock_path))?;

        let result = self.write_locked(key, &path, json);

        if let Err(e) = FileExt::unlock(&lock) {
            tracing::trace!(path = %lock_path.display(), error = %e, "unlock failed; released on close");
        }
        result
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_err(&path)(e)),
        }
    }
}

/// In-process storage for tests and `--ephemeral` sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    unavailable: Mutex<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock() = unavailable;
    }

    /// Seed a raw value, bypassing availability.
    pub fn insert_raw(&self, key: &str, json: &str) {
        self.values.lock().insert(key.to_string(), json.to_string());
    }

    /// Raw value, bypassing availability.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn check(&self) -> Result<(), StorageError> {
        if *self.unavailable.lock() {
            return Err(StorageError::Unavailable);
        }
        Ok(())
    }
}

impl DurableStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, json: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values.lock().insert(key.to_string(), json.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("state"));

        assert!(storage.read("dealerdesk.theme").unwrap().is_none());
        storage.write("dealerdesk.theme", "true").unwrap();
        assert_eq!(
            storage.read("dealerdesk.theme").unwrap().as_deref(),
            Some("true")
        );

        storage.remove("dealerdesk.theme").unwrap();
        assert!(storage.read("dealerdesk.theme").unwrap().is_none());
        // Removing twice is fine.
        storage.remove("dealerdesk.theme").unwrap();
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(
            storage.write("../escape", "1"),
            Err(StorageError::InvalidKey { .. })
        ));
        assert!(matches!(
            storage.read(".hidden"),
            Err(StorageError::InvalidKey { .. })
        ));
    }

    #[test]
    fn file_storage_enforces_quota() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).with_quota(16);

        storage.write("a", "0123456789").unwrap();
        // Overwriting the same key does not count its old size.
        storage.write("a", "0123456789abcdef").unwrap();
        let err = storage.write("b", "xy").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 18,
                quota: 16
            }
        ));
    }

    #[test]
    fn concurrent_writers_never_exceed_quota() {
        let dir = TempDir::new().unwrap();
        let storage = std::sync::Arc::new(FileStorage::new(dir.path()).with_quota(20));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let storage = std::sync::Arc::clone(&storage);
                std::thread::spawn(move || storage.write(&format!("k{i}"), "12345678").is_ok())
            })
            .collect();
        let written = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(written, 2);
        assert_eq!(storage.used_bytes(Path::new("")).unwrap(), 16);
        // The lock file is not counted as stored data.
        assert!(dir.path().join(LOCK_FILE).exists());
    }

    #[test]
    fn memory_storage_unavailable() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        assert!(matches!(
            storage.write("k", "1"),
            Err(StorageError::Unavailable)
        ));
        assert!(storage.raw("k").is_none());
        storage.set_unavailable(false);
        storage.write("k", "1").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("1"));
    }
}
