use std::io::Write;

use il_domain::config::Config;
use il_locator::{LocateError, ScanFileResolver};
use il_sessions::{SessionDirectoryRecord, SessionKey};

use super::open_store;

/// Print the resolved, verified directory of one session.
pub fn show(config: &Config, key: &SessionKey) -> anyhow::Result<()> {
    if config.imaging_root_data_dir().is_none() {
        return Err(LocateError::ConfigurationMissing.into());
    }

    let resolver = ScanFileResolver::from_config(config, open_store(config)?);
    let dir = resolver.session_dir(key)?;
    println!("{}", dir.display());
    Ok(())
}

/// Print every record of the directory store.
pub fn list(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let records = store.records();

    if records.is_empty() && !json {
        println!("(no session directory records in {})", store.path().display());
        return Ok(());
    }
    write_records(&mut std::io::stdout().lock(), &records, json)
}

/// `key<TAB>session_dir` per record, or the records as a JSON array.
pub fn write_records(
    out: &mut impl Write,
    records: &[SessionDirectoryRecord],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
        return Ok(());
    }
    for record in records {
        writeln!(out, "{}\t{}", record.key, record.session_dir)?;
    }
    Ok(())
}
