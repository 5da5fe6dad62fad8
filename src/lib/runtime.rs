//! Resolve the JVM executable used as the first command token.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

pub const JAVA_HOME_ENV: &str = "JAVA_HOME";
pub const DEFAULT_JAVA_EXECUTABLE: &str = "java";

#[cfg(windows)]
const JAVA_BINARY: &str = "java.exe";
#[cfg(not(windows))]
const JAVA_BINARY: &str = "java";

/// Resolve in the order: configured executable → `$JAVA_HOME/bin/java` → `java`.
pub fn resolve_java_executable(configured: Option<&Path>) -> String {
    resolve_java_executable_with(configured, env::var_os(JAVA_HOME_ENV))
}

/// Same as [`resolve_java_executable`] with an explicit `JAVA_HOME` value.
pub fn resolve_java_executable_with(
    configured: Option<&Path>,
    java_home: Option<OsString>,
) -> String {
    if let Some(path) = configured.filter(|p| !p.as_os_str().is_empty()) {
        return path.to_string_lossy().into_owned();
    }

    if let Some(home) = java_home.filter(|h| !h.is_empty()) {
        let candidate: PathBuf = PathBuf::from(home).join("bin").join(JAVA_BINARY);
        return candidate.to_string_lossy().into_owned();
    }

    DEFAULT_JAVA_EXECUTABLE.to_string()
}
