pub mod config;
pub mod doctor;
pub mod files;
pub mod sessions;

use anyhow::Context;
use clap::{Parser, Subcommand};

use il_domain::config::Config;
use il_locator::ScanFormat;
use il_sessions::{JsonDirectoryStore, SessionKey};

/// imaging-locator — find the raw imaging files of an acquisition session.
#[derive(Debug, Parser)]
#[command(name = "imaging-locator", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a session's raw files of one format, one path per line.
    Files {
        /// Scan format: tif (ScanImage) or sbx (Scanbox).
        #[arg(long, short)]
        format: ScanFormat,
        /// Session key as comma-separated field=value pairs
        /// (e.g. "subject=subj1,session=1").
        #[arg(long, short)]
        key: SessionKey,
        /// Print the list as a JSON array instead of plain lines.
        #[arg(long)]
        json: bool,
    },
    /// Inspect the session directory store.
    #[command(subcommand)]
    Sessions(SessionsCommand),
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Run diagnostic checks against the current configuration.
    Doctor,
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum SessionsCommand {
    /// Print the verified absolute directory of one session.
    Show {
        /// Session key as comma-separated field=value pairs.
        #[arg(long, short)]
        key: SessionKey,
    },
    /// Print every record in the directory store.
    List {
        /// Output the records as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Shared helpers ────────────────────────────────────────────────────

/// Open the JSON directory store named by `sessions.directory_store`.
pub fn open_store(config: &Config) -> anyhow::Result<JsonDirectoryStore> {
    let path = &config.sessions.directory_store;
    JsonDirectoryStore::open(path)
        .with_context(|| format!("opening session directory store {}", path.display()))
}
