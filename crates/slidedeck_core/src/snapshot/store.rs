//! Snapshot store implementations.
//!
//! The durable store is a single global slot: read once at load, written on
//! save/unload. Writers are serialized by the host's event loop, so no
//! cross-process locking is attempted here.

use crate::error::EditorError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A single-slot durable store for the serialized snapshot.
pub trait SnapshotStore {
    /// Read the slot. `None` when nothing has ever been written.
    fn read(&self) -> Result<Option<String>, EditorError>;

    /// Replace the slot contents.
    ///
    /// # Errors
    /// [`EditorError::QuotaExceeded`] when the backing medium is out of
    /// space, otherwise a generic storage error.
    fn write(&mut self, payload: &str) -> Result<(), EditorError>;

    /// Drop the slot contents, if any. Used to purge corrupt data so a bad
    /// snapshot cannot fail every subsequent load.
    fn discard(&mut self) -> Result<(), EditorError>;
}

/// File-backed store: one JSON file at a configured path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn map_write_error(err: std::io::Error) -> EditorError {
        match err.kind() {
            ErrorKind::StorageFull | ErrorKind::QuotaExceeded => EditorError::QuotaExceeded,
            _ => EditorError::Storage(err),
        }
    }
}

impl SnapshotStore for FileStore {
    fn read(&self) -> Result<Option<String>, EditorError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), EditorError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(Self::map_write_error)?;
        }
        fs::write(&self.path, payload).map_err(Self::map_write_error)
    }

    fn discard(&mut self) -> Result<(), EditorError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Volatile store holding the slot in memory.
///
/// Clones share the same slot, so a handle kept by a test or embedding host
/// observes writes made through the editor's copy. Can simulate quota
/// exhaustion for error-path coverage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
    quota_exceeded: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(raw: impl Into<String>) -> Self {
        let store = Self::default();
        *store.slot.lock().unwrap() = Some(raw.into());
        store
    }

    /// Current slot contents, for assertions.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    /// Make subsequent writes fail with [`EditorError::QuotaExceeded`].
    pub fn set_quota_exceeded(&self, exceeded: bool) {
        self.quota_exceeded.store(exceeded, Ordering::SeqCst);
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, EditorError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), EditorError> {
        if self.quota_exceeded.load(Ordering::SeqCst) {
            return Err(EditorError::QuotaExceeded);
        }
        *self.slot.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }

    fn discard(&mut self) -> Result<(), EditorError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
