use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Log levels the launched application understands (compared case-insensitively).
pub const SUPPORTED_LOG_LEVELS: &[&str] = &["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "OFF"];

/// Defaults applied to every launch request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchSection {
    pub default_log_level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLaunchSection {
    pub default_log_level: Option<String>,
}

pub fn parse_launch_section(
    raw: Option<RawLaunchSection>,
    path: &Path,
) -> Result<LaunchSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let default_log_level = raw
        .default_log_level
        .map(|level| level.trim().to_string())
        .filter(|level| !level.is_empty());

    if let Some(level) = &default_log_level {
        if !is_supported_log_level(level) {
            return Err(ConfigError::invalid_field(
                path,
                "launch.default_log_level",
                format!("Use one of {}", SUPPORTED_LOG_LEVELS.join(", ")),
            ));
        }
    }

    Ok(LaunchSection { default_log_level })
}

pub fn is_supported_log_level(level: &str) -> bool {
    SUPPORTED_LOG_LEVELS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(level))
}
