//! Key-value store backends
//!
//! The ledger persists exactly two text values, under `expenses` and
//! `budget`. Backends only move opaque text; encoding lives in the
//! repositories.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_json, write_json_atomic};

/// Durable text storage addressed by key
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` if the key was never written or was cleared
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;

    /// Delete a single key
    fn remove(&self, key: &str) -> LedgerResult<()>;

    /// Delete every key in one operation
    fn clear(&self) -> LedgerResult<()>;
}

/// Store backed by a single JSON object file
///
/// Every key lives in the same file, so each write (including `clear`) is one
/// atomic replace of that file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> LedgerResult<BTreeMap<String, String>> {
        read_json(&self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        write_json_atomic(&self.path, &entries)
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            write_json_atomic(&self.path, &entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> LedgerResult<()> {
        // Does not read first: a wipe must succeed even over an unreadable file
        write_json_atomic(&self.path, &BTreeMap::<String, String>::new())
    }
}

/// In-process store, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err<E: std::fmt::Display>(e: E) -> LedgerError {
        LedgerError::Storage(format!("Failed to acquire store lock: {}", e))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let entries = self.entries.read().map_err(Self::lock_err)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut entries = self.entries.write().map_err(Self::lock_err)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut entries = self.entries.write().map_err(Self::lock_err)?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> LedgerResult<()> {
        let mut entries = self.entries.write().map_err(Self::lock_err)?;
        entries.clear();
        Ok(())
    }
}
