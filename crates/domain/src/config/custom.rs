use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Custom (site-specific) settings
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Site-specific settings that live under the `[custom]` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomConfig {
    /// Root directory beneath which every session directory lives.
    /// Expected to be absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imaging_root_data_dir: Option<PathBuf>,
}

impl CustomConfig {
    /// The configured root data directory, or `None` when the key is
    /// unset or empty.
    pub fn root_data_dir(&self) -> Option<PathBuf> {
        self.imaging_root_data_dir
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .cloned()
    }
}
