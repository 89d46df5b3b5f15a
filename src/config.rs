//! Configuration System
//!
//! Handles loading configuration from TOML files and environment variables.
//! Every field has a default, so an empty file (or none at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chart::RetryPolicy;
use crate::tier::Thresholds;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chart binding configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_retry_interval")]
    pub retry_interval_ms: u32,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_attendance_target")]
    pub attendance_target: f64,
}

fn default_retry_interval() -> u32 {
    100
}

fn default_max_attempts() -> u32 {
    50 // 5 seconds at the default interval
}

fn default_attendance_target() -> f64 {
    75.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            retry_interval_ms: default_retry_interval(),
            max_attempts: default_max_attempts(),
            attendance_target: default_attendance_target(),
        }
    }
}

impl ChartConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            interval_ms: self.retry_interval_ms,
            max_attempts: self.max_attempts,
        }
    }
}

/// Dashboard page configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

fn default_upcoming_limit() -> usize {
    5
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

/// Quick-calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    #[serde(default = "default_year")]
    pub year: i32,

    #[serde(default = "default_month")]
    pub month: u32,

    #[serde(default = "default_critical_days")]
    pub critical_days: Vec<u32>,
}

fn default_year() -> i32 {
    2025
}

fn default_month() -> u32 {
    11
}

fn default_critical_days() -> Vec<u32> {
    vec![20, 25]
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            month: default_month(),
            critical_days: default_critical_days(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            error: e.to_string(),
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment variable overrides
    ///
    /// Overrides that make the config invalid are discarded.
    pub fn from_env() -> Self {
        Self::defaults_with(|key| std::env::var(key).ok())
    }

    fn defaults_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.apply_overrides(lookup);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring environment overrides: {}", e);
                Config::default()
            }
        }
    }

    /// Load from default locations or environment
    #[cfg(feature = "cli")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("campus").join("config.toml")),
            Some(PathBuf::from("./campus.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.thresholds.is_ordered() {
            return Err(ConfigError::Invalid(format!(
                "thresholds must satisfy critical <= good <= top (got {} / {} / {})",
                self.thresholds.critical, self.thresholds.good, self.thresholds.top
            )));
        }
        if self.chart.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "chart.max_attempts must be at least 1".to_string(),
            ));
        }
        if !(1..=12).contains(&self.calendar.month) {
            return Err(ConfigError::Invalid(format!(
                "calendar.month must be 1-12 (got {})",
                self.calendar.month
            )));
        }
        let days = days_in_month(self.calendar.year, self.calendar.month);
        if let Some(day) = self
            .calendar
            .critical_days
            .iter()
            .find(|&&d| d == 0 || d > days)
        {
            return Err(ConfigError::Invalid(format!(
                "calendar.critical_days contains {} but {}-{:02} has {} days",
                day, self.calendar.year, self.calendar.month, days
            )));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("CAMPUS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CAMPUS_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(Ok(n)) = lookup("CAMPUS_CHART_MAX_ATTEMPTS").map(|v| v.parse::<u32>()) {
            self.chart.max_attempts = n;
        }
        if let Some(Ok(n)) = lookup("CAMPUS_UPCOMING_LIMIT").map(|v| v.parse::<usize>()) {
            self.dashboard.upcoming_limit = n;
        }
    }
}

/// Number of days in a month, 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    use chrono::NaiveDate;

    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.map(|n| (n - first).num_days() as u32).unwrap_or(0)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse { path: Option<PathBuf>, error: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Campus Dashboard Configuration
#
# Environment variables override these settings:
# - CAMPUS_LOG_LEVEL
# - CAMPUS_LOG_FORMAT
# - CAMPUS_CHART_MAX_ATTEMPTS
# - CAMPUS_UPCOMING_LIMIT

[thresholds]
# Metric tiers: >= top is top, >= good is good, >= critical is warning
top = 90.0
good = 85.0
critical = 75.0

[chart]
# Poll interval while waiting for the chart library (ms)
retry_interval_ms = 100

# Give up after this many attempts
max_attempts = 50

# Minimum attendance drawn on the attendance chart
attendance_target = 75.0

[dashboard]
# Number of calendar entries shown on the dashboard
upcoming_limit = 5

[calendar]
# Month shown in the schedule's quick calendar
year = 2025
month = 11

# Day numbers flagged as critical
critical_days = [20, 25]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.thresholds.good, 85.0);
        assert_eq!(config.chart.retry_policy(), RetryPolicy::default());
        assert_eq!(config.dashboard.upcoming_limit, 5);
        assert_eq!(config.calendar.critical_days, vec![20, 25]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_parses_to_default() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("[chart]\nmax_attempts = 3\n").unwrap();
        assert_eq!(config.chart.max_attempts, 3);
        assert_eq!(config.chart.retry_interval_ms, 100);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_invalid_thresholds() {
        let err = Config::from_toml_str("[thresholds]\ngood = 60.0\ncritical = 70.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_invalid_calendar() {
        assert!(Config::from_toml_str("[calendar]\nmonth = 13\n").is_err());
        assert!(Config::from_toml_str("[calendar]\nmonth = 2\nyear = 2025\ncritical_days = [30]\n").is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(Config::from_toml_str("[chart]\nmax_attempts = 0\n").is_err());
    }

    #[test]
    fn test_invalid_overrides_fall_back_to_defaults() {
        let config = Config::defaults_with(|key| match key {
            "CAMPUS_CHART_MAX_ATTEMPTS" => Some("0".to_string()),
            "CAMPUS_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_valid_overrides_apply() {
        let config = Config::defaults_with(|key| match key {
            "CAMPUS_CHART_MAX_ATTEMPTS" => Some("12".to_string()),
            "CAMPUS_UPCOMING_LIMIT" => Some("3".to_string()),
            _ => None,
        });
        assert_eq!(config.chart.max_attempts, 12);
        assert_eq!(config.dashboard.upcoming_limit, 3);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 11), 30);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 13), 0);
    }
}
