//! Environment-driven configuration.

use thiserror::Error;

use stockroom_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const SAMPLE_DATA_VAR: &str = "STOCKROOM_SAMPLE_DATA";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var} (expected {expected})")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Process configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    /// Seed the sample catalog on startup.
    pub sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            sample_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(LOG_FORMAT_VAR)) {
            config.log_format = LogFormat::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                value: raw.clone(),
                expected: "json or pretty",
            })?;
        }

        if let Some(raw) = non_blank(lookup(SAMPLE_DATA_VAR)) {
            config.sample_data = parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: SAMPLE_DATA_VAR,
                value: raw.clone(),
                expected: "true, false, 1 or 0",
            })?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
