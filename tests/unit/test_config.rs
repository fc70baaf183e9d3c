use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use athletica::app::state::Page;
use athletica::config::{
    default_config_path, AppConfig, CONFIG_PATH_ENV, DEFAULT_TICK_RATE, LOG_LEVEL_ENV,
};
use athletica::model::profile::UnitSystem;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var(CONFIG_PATH_ENV);
    env::remove_var(LOG_LEVEL_ENV);
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config file");
    path
}

#[test]
fn test_default_values() {
    let config = AppConfig::default();

    assert_eq!(config.ui.tick_rate, DEFAULT_TICK_RATE);
    assert_eq!(config.ui.tick_rate, Duration::from_millis(120));
    assert_eq!(config.ui.start_page, Page::Dashboard);
    assert_eq!(config.ui.units, UnitSystem::Imperial);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.dir, None);
    assert!(config.logging.enable_file);
}

#[test]
fn test_default_config_path_is_under_athletica_home() {
    let path = default_config_path().expect("home directory available");
    assert!(path.ends_with(Path::new(".athletica/config.toml")));
}

#[test]
#[serial]
fn test_explicit_file_overrides_defaults() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[ui]
tick_rate_ms = 250
start_page = "workouts"
units = "metric"

[logging]
level = "debug"
dir = "custom-logs"
enable_file = false
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config loads");

    assert_eq!(config.ui.tick_rate, Duration::from_millis(250));
    assert_eq!(config.ui.start_page, Page::Workouts);
    assert_eq!(config.ui.units, UnitSystem::Metric);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.dir, Some(PathBuf::from("custom-logs")));
    assert!(!config.logging.enable_file);
}

#[test]
#[serial]
fn test_partial_file_keeps_remaining_defaults() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[logging]
level = "warn"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config loads");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.ui.tick_rate, DEFAULT_TICK_RATE);
    assert_eq!(config.ui.start_page, Page::Dashboard);
    assert!(config.logging.enable_file);
}

#[test]
#[serial]
fn test_env_log_level_wins_over_file() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[logging]
level = "debug"
"#,
    );

    env::set_var(LOG_LEVEL_ENV, "trace");
    let config = AppConfig::load(Some(&path)).expect("config loads");
    env::remove_var(LOG_LEVEL_ENV);

    assert_eq!(config.logging.level, "trace");
}

#[test]
#[serial]
fn test_blank_env_override_is_ignored() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[logging]
level = "debug"
"#,
    );

    env::set_var(LOG_LEVEL_ENV, "   ");
    let config = AppConfig::load(Some(&path)).expect("config loads");
    env::remove_var(LOG_LEVEL_ENV);

    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn test_config_path_env_selects_file() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[ui]
start_page = "profile"
"#,
    );

    env::set_var(CONFIG_PATH_ENV, &path);
    let config = AppConfig::load(None).expect("config loads");
    env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(config.ui.start_page, Page::Profile);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let missing = temp_dir.path().join("nope.toml");

    let err = AppConfig::load(Some(&missing)).expect_err("missing file rejected");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(&temp_dir, "[ui\ntick_rate_ms = oops");

    let err = AppConfig::load(Some(&path)).expect_err("malformed file rejected");
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
#[serial]
fn test_unknown_start_page_is_an_error() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[ui]
start_page = "settings"
"#,
    );

    let err = AppConfig::load(Some(&path)).expect_err("unknown page rejected");
    assert!(err.to_string().contains("invalid ui.start_page"));
}

#[test]
#[serial]
fn test_tick_rate_bounds_are_enforced() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");

    let too_fast = write_config(&temp_dir, "[ui]\ntick_rate_ms = 5\n");
    let err = AppConfig::load(Some(&too_fast)).expect_err("too fast rejected");
    assert!(err.to_string().contains("ui.tick_rate_ms must be between"));

    let too_slow = write_config(&temp_dir, "[ui]\ntick_rate_ms = 5000\n");
    assert!(AppConfig::load(Some(&too_slow)).is_err());

    let fastest = write_config(&temp_dir, "[ui]\ntick_rate_ms = 30\n");
    assert!(AppConfig::load(Some(&fastest)).is_ok());

    let slowest = write_config(&temp_dir, "[ui]\ntick_rate_ms = 1000\n");
    assert!(AppConfig::load(Some(&slowest)).is_ok());
}

#[test]
#[serial]
fn test_invalid_log_level_is_an_error() {
    clear_env();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &temp_dir,
        r#"
[logging]
level = "shout"
"#,
    );

    let err = AppConfig::load(Some(&path)).expect_err("bad level rejected");
    assert!(err.to_string().contains("logging.level"));
}
