use std::path::Path;

use tracing::{debug, info};

use super::{ConfigSource, LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_source(path: &Path, source: ConfigSource) {
    match source {
        ConfigSource::Flag => info!(
            target: "jar_launch::config",
            path = %path.display(),
            "Loading configuration from --config"
        ),
        ConfigSource::Env => info!(
            target: "jar_launch::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            "Loading configuration using JAR_LAUNCH_CONFIG environment variable"
        ),
        ConfigSource::Default => debug!(
            target: "jar_launch::config",
            path = %path.display(),
            default = DEFAULT_CONFIG_PATH,
            "No configuration override; trying default file"
        ),
    }
}

pub fn log_defaults(path: &Path) {
    debug!(
        target: "jar_launch::config",
        path = %path.display(),
        "Default configuration file not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "jar_launch::config",
        path = %config
            .source_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        runtime_executable = ?config.runtime.executable,
        entry_point = %config.bundle.entry_point,
        default_log_level = ?config.launch.default_log_level,
        "Configuration file loaded successfully"
    );
}
