use std::{
    path::PathBuf,
    process::{Command, Output},
};

use jar_launch::launch::Launcher;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_jar-launch");
pub const JAR: &str = "/path/to/app.jar";

pub fn launcher() -> Launcher {
    Launcher::new("java")
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn position(command: &[String], token: &str) -> usize {
    command
        .iter()
        .position(|arg| arg == token)
        .unwrap_or_else(|| panic!("{token} should be present in {command:?}"))
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// The binary with no `--config`, no `JAR_LAUNCH_CONFIG` and warn-level logs.
pub fn bare_command() -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .env_remove("JAR_LAUNCH_CONFIG")
        .env("RUST_LOG", "warn");
    command
}

/// Run the binary with a fixed config so `JAVA_HOME` on the host does not leak in.
pub fn run_binary(args: &[&str]) -> Output {
    bare_command()
        .arg("--config")
        .arg(fixture("tests/fixtures/config_valid.toml"))
        .args(args)
        .output()
        .expect("jar-launch should start")
}
