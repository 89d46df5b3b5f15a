//! Loading configuration files from disk

use std::io::Write;

use campus::config::generate_default_config;
use campus::{Config, ConfigError};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dashboard]\nupcoming_limit = 3\n\n[calendar]\ncritical_days = [1, 30]").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.dashboard.upcoming_limit, 3);
    assert_eq!(config.calendar.critical_days, vec![1, 30]);
    assert_eq!(config.chart.max_attempts, 50);
}

#[test]
fn test_generated_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campus.toml");
    std::fs::write(&path, generate_default_config()).unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_file_names_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[chart\nmax_attempts = ").unwrap();

    match Config::load(file.path()).unwrap_err() {
        ConfigError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
        other => panic!("expected parse error, got {other:?}"),
    }
}

// The only test in this binary that touches CAMPUS_* variables
#[test]
fn test_env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[chart]\nmax_attempts = 10\n\n[logging]\nlevel = \"warn\"").unwrap();

    std::env::set_var("CAMPUS_CHART_MAX_ATTEMPTS", "7");
    std::env::set_var("CAMPUS_LOG_FORMAT", "json");
    std::env::set_var("CAMPUS_UPCOMING_LIMIT", "not-a-number");
    let config = Config::load_with_env(file.path());
    std::env::remove_var("CAMPUS_CHART_MAX_ATTEMPTS");
    std::env::remove_var("CAMPUS_LOG_FORMAT");
    std::env::remove_var("CAMPUS_UPCOMING_LIMIT");

    let config = config.unwrap();
    assert_eq!(config.chart.max_attempts, 7);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.dashboard.upcoming_limit, 5);
}
