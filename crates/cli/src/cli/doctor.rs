use std::path::Path;

use il_domain::config::{Config, ConfigSeverity};
use il_sessions::JsonDirectoryStore;

/// Run all diagnostic checks and print a summary.
///
/// Returns `true` when every check passes.
pub fn run(config: &Config, config_path: &Path) -> bool {
    println!("imaging-locator doctor");
    println!("======================\n");

    let mut all_passed = true;

    // 1. Config file
    check_config_file(config_path, &mut all_passed);

    // 2. Config validation
    check_config_validation(config, &mut all_passed);

    // 3. Imaging root
    check_root_dir(config, &mut all_passed);

    // 4. Session directory store
    check_directory_store(config, &mut all_passed);

    println!();
    if all_passed {
        println!("All checks passed.");
    } else {
        println!("Some checks failed. Review the output above.");
    }

    all_passed
}

// ── Individual checks ─────────────────────────────────────────────────

fn check_config_file(config_path: &Path, all_passed: &mut bool) {
    let exists = config_path.exists();
    print_check(
        "Config file exists",
        exists,
        if exists {
            config_path.display().to_string()
        } else {
            format!("{} not found (using defaults)", config_path.display())
        },
    );
    if !exists {
        *all_passed = false;
    }
}

fn check_config_validation(config: &Config, all_passed: &mut bool) {
    let issues = config.validate();
    let error_count = issues
        .iter()
        .filter(|e| e.severity == ConfigSeverity::Error)
        .count();

    if issues.is_empty() {
        print_check("Config validation", true, "no issues".into());
        return;
    }

    print_check(
        "Config validation",
        error_count == 0,
        format!("{} issue(s) ({} error(s))", issues.len(), error_count),
    );
    for issue in &issues {
        println!("      {issue}");
    }
    if error_count > 0 {
        *all_passed = false;
    }
}

fn check_root_dir(config: &Config, all_passed: &mut bool) {
    let (ok, detail) = match config.imaging_root_data_dir() {
        None => (false, "custom.imaging_root_data_dir is not set".to_owned()),
        Some(root) if root.is_dir() => (true, root.display().to_string()),
        Some(root) => (false, format!("{} (missing)", root.display())),
    };
    print_check("Imaging root directory", ok, detail);
    if !ok {
        *all_passed = false;
    }
}

fn check_directory_store(config: &Config, all_passed: &mut bool) {
    let path = &config.sessions.directory_store;
    let (ok, detail) = match JsonDirectoryStore::open(path) {
        Ok(store) => (true, format!("{} ({} record(s))", path.display(), store.len())),
        Err(e) => (false, e.to_string()),
    };
    print_check("Session directory store", ok, detail);
    if !ok {
        *all_passed = false;
    }
}

fn print_check(name: &str, passed: bool, detail: String) {
    let status = if passed { "PASS" } else { "FAIL" };
    println!("  [{status}] {name}: {detail}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn passes_with_root_and_store() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();
        let store_path = dir.path().join("session_dirs.json");
        std::fs::write(&store_path, "[]").unwrap();

        let mut config = Config::default();
        config.custom.imaging_root_data_dir = Some(dir.path().to_path_buf());
        config.sessions.directory_store = store_path;

        assert!(run(&config, &config_path));
    }

    #[test]
    fn fails_without_root() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();
        let store_path = dir.path().join("session_dirs.json");
        std::fs::write(&store_path, "[]").unwrap();

        let mut config = Config::default();
        config.sessions.directory_store = store_path;

        assert!(!run(&config, &config_path));
    }

    #[test]
    fn fails_when_store_is_missing() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        let mut config = Config::default();
        config.custom.imaging_root_data_dir = Some(dir.path().to_path_buf());
        config.sessions.directory_store = dir.path().join("absent.json");

        assert!(!run(&config, &config_path));
    }
}
