use std::io::Write;
use std::path::Path;

use il_domain::config::{Config, ConfigError, ConfigSeverity};

/// Report validation issues for the loaded config, errors first.
///
/// Returns `Ok(false)` when any issue has error severity; warnings alone
/// still count as a usable config.
pub fn validate(config: &Config, config_path: &Path, out: &mut impl Write) -> anyhow::Result<bool> {
    let (errors, warnings): (Vec<ConfigError>, Vec<ConfigError>) = config
        .validate()
        .into_iter()
        .partition(|issue| issue.severity == ConfigSeverity::Error);

    if errors.is_empty() && warnings.is_empty() {
        writeln!(out, "{}: ok", config_path.display())?;
        return Ok(true);
    }

    for issue in errors.iter().chain(&warnings) {
        writeln!(out, "{issue}")?;
    }
    writeln!(
        out,
        "{}: {} error(s), {} warning(s)",
        config_path.display(),
        errors.len(),
        warnings.len(),
    )?;

    Ok(errors.is_empty())
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    let output = toml::to_string_pretty(config)?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn render(config: &Config) -> (bool, String) {
        let mut out = Vec::new();
        let ok = validate(config, Path::new("config.toml"), &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn clean_config_reports_ok() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.custom.imaging_root_data_dir = Some(dir.path().to_path_buf());

        let (ok, text) = render(&config);
        assert!(ok);
        assert_eq!(text, "config.toml: ok\n");
    }

    #[test]
    fn warnings_alone_pass() {
        let (ok, text) = render(&Config::default());
        assert!(ok);
        assert!(text.starts_with("[WARN] custom.imaging_root_data_dir"));
        assert!(text.ends_with("config.toml: 0 error(s), 1 warning(s)\n"));
    }

    #[test]
    fn errors_are_listed_before_warnings() {
        let mut config = Config::default();
        config.sessions.directory_store = PathBuf::new();

        let (ok, text) = render(&config);
        assert!(!ok);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[ERROR] sessions.directory_store"));
        assert!(lines[1].starts_with("[WARN] custom.imaging_root_data_dir"));
        assert_eq!(lines[2], "config.toml: 1 error(s), 1 warning(s)");
    }
}
