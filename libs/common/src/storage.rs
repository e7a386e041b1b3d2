//! Durable key/value storage for client state
//!
//! This module provides the small string store the client keeps its session
//! in: an in-memory implementation for tests and embedding, and a JSON file
//! implementation that survives restarts. Every mutation of the file store
//! rewrites the whole file through a rename, so a reader never observes a
//! half-applied update.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::StorageError;

/// String key/value store shared between the session gate and its readers
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a key-value pair, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete several keys in one write
    ///
    /// Missing keys are not an error.
    fn delete_many(&self, keys: &[&str]) -> Result<(), StorageError>;

    /// Set `entries` and delete `removed` in one write
    ///
    /// Either every change is applied or none is.
    fn replace(&self, entries: &[(&str, &str)], removed: &[&str]) -> Result<(), StorageError>;

    /// Delete a key
    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.delete_many(&[key])
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        (**self).delete_many(keys)
    }

    fn replace(&self, entries: &[(&str, &str)], removed: &[&str]) -> Result<(), StorageError> {
        (**self).replace(entries, removed)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }

    fn replace(&self, entries: &[(&str, &str)], removed: &[&str]) -> Result<(), StorageError> {
        let mut stored = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for key in removed {
            stored.remove(*key);
        }
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

type Entries = BTreeMap<String, String>;

/// Store persisted as a JSON object in a single file
///
/// The file is created on first write, with owner-only permissions on Unix.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the entries for a mutation, starting over if the file is corrupt
    ///
    /// The flag is set when a corrupted file was discarded and must be rewritten.
    fn read_entries_for_write(&self) -> Result<(Entries, bool), StorageError> {
        match self.read_entries() {
            Err(StorageError::Corrupt { path, source }) => {
                warn!("Discarding corrupted store at {}: {}", path.display(), source);
                Ok((Entries::new(), true))
            }
            other => other.map(|entries| (entries, false)),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;

        let contents = serde_json::to_vec_pretty(entries).map_err(StorageError::Encode)?;

        // Owner-only from creation, unique per write
        let mut staging = NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        staging
            .write_all(&contents)
            .and_then(|()| staging.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        staging
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        debug!("Wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut entries, _) = self.read_entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn delete_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.path.exists() {
            return Ok(());
        }

        let (mut entries, mut dirty) = self.read_entries_for_write()?;
        for key in keys {
            dirty |= entries.remove(*key).is_some();
        }

        if !dirty {
            return Ok(());
        }
        self.write_entries(&entries)
    }

    fn replace(&self, entries: &[(&str, &str)], removed: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut stored, _) = self.read_entries_for_write()?;
        for key in removed {
            stored.remove(*key);
        }
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        self.write_entries(&stored)
    }
}
