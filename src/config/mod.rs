//! Load and validate launcher configuration.
use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod bundle;
pub mod launch;
pub mod runtime;
pub mod telemetry;

pub use bundle::{parse_bundle_section, BundleSection, RawBundleSection};
pub use launch::{
    is_supported_log_level, parse_launch_section, LaunchSection, RawLaunchSection,
    SUPPORTED_LOG_LEVELS,
};
pub use runtime::{parse_runtime_section, RawRuntimeSection, RuntimeSection};

pub const CONFIG_ENV_KEY: &str = "JAR_LAUNCH_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "jar-launch.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    Env,
    Default,
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauncherConfig {
    pub runtime: RuntimeSection,
    pub bundle: BundleSection,
    pub launch: LaunchSection,
    /// `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    runtime: Option<RawRuntimeSection>,
    bundle: Option<RawBundleSection>,
    launch: Option<RawLaunchSection>,
}

/// Resolve the config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> (PathBuf, ConfigSource) {
    if let Some(path) = override_path {
        return (path, ConfigSource::Flag);
    }
    match env::var(CONFIG_ENV_KEY) {
        Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), ConfigSource::Env),
        _ => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
    }
}

impl LauncherConfig {
    /// Load using `override_path`, `JAR_LAUNCH_CONFIG`, or `jar-launch.toml`.
    ///
    /// Only the implicit default may be absent; explicit paths must exist.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let (path, source) = resolve_config_path(override_path);
        telemetry::log_source(&path, source);

        if !path.exists() {
            if source == ConfigSource::Default {
                telemetry::log_defaults(&path);
                return Ok(Self::default());
            }
            let error = ConfigError::MissingFile { path: path.clone() };
            error!(
                target: "jar_launch::config",
                path = %path.display(),
                reason = %error,
                "Configuration file not found"
            );
            return Err(error);
        }

        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let source = config::File::from(path.clone()).format(config::FileFormat::Toml);
        let builder = config::Config::builder().add_source(source);
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "jar_launch::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "jar_launch::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, &path).map_err(|err| {
            error!(
                target: "jar_launch::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            runtime: parse_runtime_section(raw.runtime, path)?,
            bundle: parse_bundle_section(raw.bundle, path)?,
            launch: parse_launch_section(raw.launch, path)?,
            source_path: Some(path.to_path_buf()),
        })
    }
}
