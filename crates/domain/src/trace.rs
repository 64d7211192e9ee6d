use serde::Serialize;

/// Structured trace events emitted across all imaging-locator crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ConfigLoaded {
        path: String,
        file_present: bool,
        root_configured: bool,
    },
    DirectoryStoreLoaded {
        path: String,
        records: usize,
    },
    SessionDirectoryResolved {
        session_key: String,
        session_dir: String,
    },
    ScanFilesListed {
        session_key: String,
        directory: String,
        extension: String,
        files: usize,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "il_event");
    }
}
