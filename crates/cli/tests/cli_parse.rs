use clap::Parser;

use il_cli::cli::{Cli, Command, ConfigCommand, SessionsCommand};
use il_locator::ScanFormat;

#[test]
fn files_parses_format_and_key() {
    let cli = Cli::try_parse_from([
        "imaging-locator",
        "files",
        "--format",
        "sbx",
        "--key",
        "subject=subj1,session=1",
    ])
    .unwrap();

    match cli.command {
        Command::Files { format, key, json } => {
            assert_eq!(format, ScanFormat::Sbx);
            assert_eq!(key.get("subject"), Some("subj1"));
            assert_eq!(key.get("session"), Some("1"));
            assert!(!json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn files_accepts_short_flags_and_json() {
    let cli = Cli::try_parse_from([
        "imaging-locator", "files", "-f", "tiff", "-k", "subject=s", "--json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::Files { format: ScanFormat::Tiff, json: true, .. }
    ));
}

#[test]
fn files_rejects_unknown_format() {
    let err = Cli::try_parse_from([
        "imaging-locator", "files", "--format", "nd2", "--key", "subject=s",
    ])
    .unwrap_err();
    assert!(err.to_string().contains("nd2"));
}

#[test]
fn files_rejects_malformed_key() {
    assert!(Cli::try_parse_from([
        "imaging-locator", "files", "--format", "tif", "--key", "subject",
    ])
    .is_err());
}

#[test]
fn sessions_and_config_subcommands() {
    let cli = Cli::try_parse_from(["imaging-locator", "sessions", "show", "-k", "subject=s"]).unwrap();
    assert!(matches!(cli.command, Command::Sessions(SessionsCommand::Show { .. })));

    let cli = Cli::try_parse_from(["imaging-locator", "sessions", "list", "--json"]).unwrap();
    assert!(matches!(cli.command, Command::Sessions(SessionsCommand::List { json: true })));

    let cli = Cli::try_parse_from(["imaging-locator", "config", "validate"]).unwrap();
    assert!(matches!(cli.command, Command::Config(ConfigCommand::Validate)));

    let cli = Cli::try_parse_from(["imaging-locator", "doctor"]).unwrap();
    assert!(matches!(cli.command, Command::Doctor));
}
