use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw acquisition formats the locator knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanFormat {
    /// ScanImage TIFF stacks (`*.tif`).
    Tiff,
    /// Scanbox raw files (`*.sbx`).
    Sbx,
}

impl ScanFormat {
    pub const ALL: [ScanFormat; 2] = [ScanFormat::Tiff, ScanFormat::Sbx];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ScanFormat::Tiff => "tif",
            ScanFormat::Sbx => "sbx",
        }
    }

    /// Glob pattern matching this format's files inside one directory.
    pub fn file_pattern(self) -> String {
        format!("*.{}", self.extension())
    }
}

impl fmt::Display for ScanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scan format {0:?} (expected one of: tif, tiff, scanimage, sbx, scanbox)")]
pub struct ParseScanFormatError(String);

impl FromStr for ScanFormat {
    type Err = ParseScanFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tif" | "tiff" | "scanimage" => Ok(ScanFormat::Tiff),
            "sbx" | "scanbox" => Ok(ScanFormat::Sbx),
            _ => Err(ParseScanFormatError(s.to_owned())),
        }
    }
}
