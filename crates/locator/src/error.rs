use std::path::PathBuf;

use il_sessions::LookupError;

/// Why a session's raw files could not be located.
#[derive(thiserror::Error, Debug)]
pub enum LocateError {
    #[error("imaging root data directory is not configured (set custom.imaging_root_data_dir)")]
    ConfigurationMissing,

    /// Passed through from the directory store unchanged.
    #[error(transparent)]
    SessionLookup(#[from] LookupError),

    #[error("session directory not found ({})", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("no .{extension} file found in {}", dir.display())]
    NoMatchingFiles { dir: PathBuf, extension: String },

    #[error("invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
