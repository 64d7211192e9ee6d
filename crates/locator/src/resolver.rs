//! Session file resolution.
//!
//! Steps, in order: root from config, `session_dir` from the store, join,
//! directory check, match children against `*.<ext>`.  Every failure is
//! returned to the caller as-is; nothing is retried and no partial list is
//! ever returned.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

use glob::{MatchOptions, Pattern};

use il_domain::config::Config;
use il_domain::trace::TraceEvent;
use il_sessions::{DirectoryStore, SessionKey};

use crate::error::LocateError;
use crate::format::ScanFormat;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Finds the raw files of a session beneath the imaging root.
///
/// Holds no mutable state, so one resolver can serve concurrent callers as
/// long as the store allows concurrent reads.
pub struct ScanFileResolver<S> {
    root: Option<PathBuf>,
    store: S,
}

impl<S: DirectoryStore> ScanFileResolver<S> {
    pub fn new(root: Option<PathBuf>, store: S) -> Self {
        Self { root, store }
    }

    /// Build a resolver rooted at `custom.imaging_root_data_dir`.
    pub fn from_config(config: &Config, store: S) -> Self {
        Self::new(config.imaging_root_data_dir(), store)
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve and verify the session's directory
    /// (`<root>/<session_dir>`).
    pub fn session_dir(&self, key: &SessionKey) -> Result<PathBuf, LocateError> {
        let root = self.root.as_deref().ok_or(LocateError::ConfigurationMissing)?;
        let session_dir = self.store.fetch_session_dir(key)?;

        TraceEvent::SessionDirectoryResolved {
            session_key: key.to_string(),
            session_dir: session_dir.clone(),
        }
        .emit();

        let dir = join_session_dir(root, &session_dir);
        if !dir.is_dir() {
            return Err(LocateError::DirectoryNotFound { path: dir });
        }
        Ok(dir)
    }

    /// List the session's files of the given format, in enumeration order.
    ///
    /// Fails with [`LocateError::NoMatchingFiles`] rather than returning an
    /// empty list.
    pub fn list_session_files(
        &self,
        key: &SessionKey,
        format: ScanFormat,
    ) -> Result<Vec<String>, LocateError> {
        let dir = self.session_dir(key)?;
        let files = list_matching(&dir, format)?;

        if files.is_empty() {
            return Err(LocateError::NoMatchingFiles {
                dir,
                extension: format.extension().to_owned(),
            });
        }

        TraceEvent::ScanFilesListed {
            session_key: key.to_string(),
            directory: dir.display().to_string(),
            extension: format.extension().to_owned(),
            files: files.len(),
        }
        .emit();

        Ok(files)
    }

    /// ScanImage `.tif` files of the session.
    pub fn scan_image_files(&self, key: &SessionKey) -> Result<Vec<String>, LocateError> {
        self.list_session_files(key, ScanFormat::Tiff)
    }

    /// Scanbox `.sbx` files of the session.
    pub fn scan_box_files(&self, key: &SessionKey) -> Result<Vec<String>, LocateError> {
        self.list_session_files(key, ScanFormat::Sbx)
    }
}

/// `root / session_dir` with `.` components dropped.  `..` is kept as-is.
fn join_session_dir(root: &Path, session_dir: &str) -> PathBuf {
    root.join(session_dir)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Direct children of `dir` matching `*.<ext>` that are files, in
/// `read_dir` order.
///
/// Only the file name goes through the pattern; `dir` itself is never
/// converted to a string, so non-UTF-8 directories are listed correctly.
fn list_matching(dir: &Path, format: ScanFormat) -> Result<Vec<String>, LocateError> {
    let raw_pattern = format.file_pattern();
    let pattern = Pattern::new(&raw_pattern).map_err(|source| LocateError::Pattern {
        pattern: raw_pattern.clone(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), pattern = %raw_pattern, "listing session files");

    let io_err = |source| LocateError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name();
        if !pattern.matches_with(&name.to_string_lossy(), MATCH_OPTIONS) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(to_posix_string(&path));
        }
    }
    Ok(files)
}

fn to_posix_string(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}
