use std::io::Write;

use il_domain::config::Config;
use il_locator::{LocateError, ScanFileResolver, ScanFormat};
use il_sessions::SessionKey;

use super::open_store;

/// Resolve the session's files and print them to stdout.
pub fn run(config: &Config, format: ScanFormat, key: &SessionKey, json: bool) -> anyhow::Result<()> {
    let files = resolve(config, format, key)?;
    write_files(&mut std::io::stdout().lock(), &files, json)
}

/// Resolve the session's files of `format` using the configured root and
/// directory store.
pub fn resolve(config: &Config, format: ScanFormat, key: &SessionKey) -> anyhow::Result<Vec<String>> {
    // Report a missing root before complaining about the store.
    if config.imaging_root_data_dir().is_none() {
        return Err(LocateError::ConfigurationMissing.into());
    }

    tracing::debug!(%key, %format, "resolving session files");
    let resolver = ScanFileResolver::from_config(config, open_store(config)?);
    Ok(resolver.list_session_files(key, format)?)
}

/// One path per line, or a pretty-printed JSON array.
pub fn write_files(out: &mut impl Write, files: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, files)?;
        writeln!(out)?;
    } else {
        for file in files {
            writeln!(out, "{file}")?;
        }
    }
    Ok(())
}
