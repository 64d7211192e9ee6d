//! File-backed directory store.
//!
//! Reads an export of the pipeline's session directory table: a JSON array
//! of flat objects, each holding the session's key fields plus a
//! `session_dir` string.
//!
//! ```json
//! [
//!   { "subject": "subj1", "session": 1, "session_dir": "subj1/sess1" }
//! ]
//! ```
//!
//! Key values may be strings, numbers or booleans; they are compared in
//! their textual form.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde_json::{Map, Value};

use il_domain::trace::TraceEvent;

use crate::session_key::SessionKey;
use crate::store::{fetch_one, DirectoryStore, LookupError, SessionDirectoryRecord};

const SESSION_DIR_FIELD: &str = "session_dir";

/// Directory store loaded from a JSON export on disk.
pub struct JsonDirectoryStore {
    path: PathBuf,
    records: RwLock<Vec<SessionDirectoryRecord>>,
}

impl JsonDirectoryStore {
    /// Load the store from `path`.  The file must exist.
    pub fn open(path: &Path) -> Result<Self, LookupError> {
        let records = load_records(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            records: RwLock::new(records),
        })
    }

    /// Re-read the backing file, replacing the in-memory records.
    /// On failure the previous records are kept.
    pub fn reload(&self) -> Result<usize, LookupError> {
        let records = load_records(&self.path).inspect_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "directory store reload failed");
        })?;
        let count = records.len();
        *self.records.write() = records;
        Ok(count)
    }

    pub fn path(&self) -> &Path {
        &self.path
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

impl DirectoryStore for JsonDirectoryStore {
    fn fetch_session_dir(&self, key: &SessionKey) -> Result<String, LookupError> {
        let records = self.records.read();
        fetch_one(records.iter(), key).map(|r| r.session_dir.clone())
    }
}

fn load_records(path: &Path) -> Result<Vec<SessionDirectoryRecord>, LookupError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| LookupError::Backend(format!("reading {}: {e}", path.display())))?;
    let rows: Vec<Map<String, Value>> = serde_json::from_str(&raw)
        .map_err(|e| LookupError::Backend(format!("parsing {}: {e}", path.display())))?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            parse_record(row).map_err(|msg| {
                LookupError::Backend(format!("{} record {i}: {msg}", path.display()))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    TraceEvent::DirectoryStoreLoaded {
        path: path.display().to_string(),
        records: records.len(),
    }
    .emit();

    Ok(records)
}

fn parse_record(mut row: Map<String, Value>) -> Result<SessionDirectoryRecord, String> {
    let session_dir = match row.remove(SESSION_DIR_FIELD) {
        Some(Value::String(dir)) => dir,
        Some(other) => return Err(format!("{SESSION_DIR_FIELD} must be a string, got {other}")),
        None => return Err(format!("missing {SESSION_DIR_FIELD}")),
    };

    let mut key = SessionKey::new();
    for (field, value) in row {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => return Err(format!("field {field:?} must be a scalar, got {other}")),
        };
        key.insert(field, text);
    }

    Ok(SessionDirectoryRecord::new(key, session_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("session_dirs.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn numeric_key_values_compare_as_text() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[{"subject": "subj1", "session": 1, "session_dir": "subj1/sess1"}]"#,
        );
        let store = JsonDirectoryStore::open(&path).unwrap();
        let key: SessionKey = "subject=subj1,session=1".parse().unwrap();
        assert_eq!(store.fetch_session_dir(&key).unwrap(), "subj1/sess1");
    }

    #[test]
    fn missing_session_dir_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"[{"subject": "subj1"}]"#);
        let err = JsonDirectoryStore::open(&path).err().unwrap();
        assert!(err.to_string().contains("missing session_dir"));
    }

    #[test]
    fn nested_key_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[{"subject": {"id": 1}, "session_dir": "x"}]"#,
        );
        let err = JsonDirectoryStore::open(&path).err().unwrap();
        assert!(err.to_string().contains("must be a scalar"));
    }

    #[test]
    fn missing_file_is_a_backend_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonDirectoryStore::open(&dir.path().join("nope.json")).err().unwrap();
        assert!(matches!(err, LookupError::Backend(_)));
    }
}
