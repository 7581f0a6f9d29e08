//! Session record storage
//!
//! The session record is persisted as a JSON file and replaced wholesale on
//! every save. Callers that need to change one field must load, mutate a
//! copy, and save.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use shared::SessionRecord;

use crate::error::ConsoleResult;

/// Durable storage for the session record.
///
/// Malformed persisted data loads as absent (unauthenticated), never as an
/// error; clearing an already-cleared store is a no-op.
pub trait SessionStore: Send + Sync {
    /// Read the persisted record. `None` when missing or malformed.
    fn load(&self) -> Option<SessionRecord>;

    /// Persist a record wholesale, overwriting any prior value.
    fn save(&self, record: &SessionRecord) -> ConsoleResult<()>;

    /// Remove the record entirely.
    fn clear(&self) -> ConsoleResult<()>;

    /// Whether a record is currently persisted.
    fn exists(&self) -> bool {
        self.load().is_some()
    }
}

/// File-backed session store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<SessionRecord> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    fn save(&self, record: &SessionRecord) -> ConsoleResult<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> ConsoleResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// In-memory session store for tests and embedded shells
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionRecord> {
        self.record.lock().clone()
    }

    fn save(&self, record: &SessionRecord) -> ConsoleResult<()> {
        *self.record.lock() = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> ConsoleResult<()> {
        *self.record.lock() = None;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.record.lock().is_some()
    }
}
