use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// JVM runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeSection {
    /// Explicit java executable; `None` defers to `JAVA_HOME` / `PATH`.
    pub executable: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRuntimeSection {
    pub executable: Option<PathBuf>,
}

pub fn parse_runtime_section(
    raw: Option<RawRuntimeSection>,
    path: &Path,
) -> Result<RuntimeSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let executable = raw.executable.filter(|p| !p.as_os_str().is_empty());
    if let Some(executable) = &executable {
        if executable.to_string_lossy().trim() != executable.to_string_lossy() {
            return Err(ConfigError::invalid_field(
                path,
                "runtime.executable",
                "Remove leading or trailing whitespace",
            ));
        }
    }
    Ok(RuntimeSection { executable })
}
