//! Session → directory lookup.
//!
//! The mapping from a session key to the session's directory (relative to
//! the imaging root) is owned by the data pipeline.  [`DirectoryStore`] is
//! the read-only capability the locator needs from it; a lookup must match
//! exactly one record.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::session_key::SessionKey;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Failure of a single-record fetch.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("no session directory record matches ({key})")]
    NotFound { key: SessionKey },

    #[error("{count} session directory records match ({key}); expected exactly one")]
    Ambiguous { key: SessionKey, count: usize },

    #[error("directory store: {0}")]
    Backend(String),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Records
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One row of the session directory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDirectoryRecord {
    #[serde(flatten)]
    pub key: SessionKey,
    /// Session directory, relative to the imaging root.
    pub session_dir: String,
}

impl SessionDirectoryRecord {
    pub fn new(key: SessionKey, session_dir: impl Into<String>) -> Self {
        Self {
            key,
            session_dir: session_dir.into(),
        }
    }

    /// Restriction by common fields: every field of `key` that this record
    /// also carries must be equal.  Fields the record does not carry are
    /// ignored, so an empty key matches every record.
    pub fn matches(&self, key: &SessionKey) -> bool {
        key.iter()
            .all(|(field, value)| self.key.get(field).map_or(true, |own| own == value))
    }
}

/// Fetch the single record in `records` matching `key`.
pub fn fetch_one<'a>(
    records: impl IntoIterator<Item = &'a SessionDirectoryRecord>,
    key: &SessionKey,
) -> Result<&'a SessionDirectoryRecord, LookupError> {
    let mut matching = records.into_iter().filter(|r| r.matches(key));
    let first = matching.next().ok_or_else(|| LookupError::NotFound { key: key.clone() })?;
    let extra = matching.count();
    if extra > 0 {
        return Err(LookupError::Ambiguous {
            key: key.clone(),
            count: extra + 1,
        });
    }
    Ok(first)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Store trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Read-only access to the session directory table.
pub trait DirectoryStore: Send + Sync {
    /// Return the relative `session_dir` of the one record matching `key`.
    fn fetch_session_dir(&self, key: &SessionKey) -> Result<String, LookupError>;
}

impl<T: DirectoryStore + ?Sized> DirectoryStore for Arc<T> {
    fn fetch_session_dir(&self, key: &SessionKey) -> Result<String, LookupError> {
        (**self).fetch_session_dir(key)
    }
}

impl<T: DirectoryStore + ?Sized> DirectoryStore for &T {
    fn fetch_session_dir(&self, key: &SessionKey) -> Result<String, LookupError> {
        (**self).fetch_session_dir(key)
    }
}

impl<T: DirectoryStore + ?Sized> DirectoryStore for Box<T> {
    fn fetch_session_dir(&self, key: &SessionKey) -> Result<String, LookupError> {
        (**self).fetch_session_dir(key)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// In-memory store
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A directory store held entirely in memory.
#[derive(Default)]
pub struct MemoryDirectoryStore {
    records: RwLock<Vec<SessionDirectoryRecord>>,
}

impl MemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SessionDirectoryRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn insert(&self, key: SessionKey, session_dir: impl Into<String>) {
        self.records
            .write()
            .push(SessionDirectoryRecord::new(key, session_dir));
    }

    pub fn records(&self) -> Vec<SessionDirectoryRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn fetch_session_dir(&self, key: &SessionKey) -> Result<String, LookupError> {
        let records = self.records.read();
        fetch_one(records.iter(), key).map(|r| r.session_dir.clone())
    }
}
