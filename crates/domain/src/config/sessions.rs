use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session directory store
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where the session → directory mapping is read from.
///
/// The mapping is owned by the data pipeline; this process only reads an
/// export of it (a JSON array of records, one per session).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsConfig {
    #[serde(default = "d_directory_store")]
    pub directory_store: PathBuf,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            directory_store: d_directory_store(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_directory_store() -> PathBuf {
    PathBuf::from("./data/session_dirs.json")
}
