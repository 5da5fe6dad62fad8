//! CLI argument definitions and `LaunchRequest` construction.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

use crate::{
    config::is_supported_log_level,
    launch::{validate_app_args, LaunchRequest, PassthroughError, Variant},
};

/// How the planned command is printed.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"variant": ..., "command": [...]}`
    Json,
    /// One POSIX-quoted command line.
    Shell,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jar-launch",
    author,
    version,
    about = "Plan the JVM command that runs a packaged application in CLI mode",
    long_about = None,
    after_help = "Example:\n  jar-launch --jar app.jar --operation EXECUTE -J -Xmx512m -- --spring.profiles.active=prod"
)]
pub struct LaunchArgs {
    /// Path to the application JAR.
    #[arg(long, value_name = "PATH")]
    pub jar: String,
    /// Packaging layout of the JAR.
    #[arg(long, value_enum, default_value_t = Variant::ManagedRuntimeBundle)]
    pub variant: Variant,
    /// Operation forwarded to the application (e.g. EXECUTE, LIST).
    #[arg(long, value_name = "NAME")]
    pub operation: Option<String>,
    /// File the application writes its result to.
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<String>,
    /// Root log level for the application (overrides launch.default_log_level).
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<String>,
    /// Operation-specific argument, emitted as `--KEY=VALUE` (repeatable).
    #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_operation_arg)]
    pub operation_args: Vec<(String, String)>,
    /// Path to jar-launch.toml (overrides JAR_LAUNCH_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Output format for the planned command.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    #[command(flatten)]
    pub passthrough: PassthroughArgs,
}

impl LaunchArgs {
    /// Build the request; `default_log_level` applies when `--log-level` is absent or empty.
    pub fn to_request(&self, default_log_level: Option<&str>) -> LaunchRequest {
        let log_level = self
            .log_level
            .as_deref()
            .filter(|level| !level.is_empty())
            .or(default_log_level);
        LaunchRequest::builder(self.jar.clone())
            .operation(self.operation.clone())
            .output_file(self.output_file.clone())
            .log_level(log_level)
            .operation_args(self.operation_args.iter().cloned())
            .runtime_args(self.passthrough.java_opts().iter().cloned())
            .app_args(self.passthrough.app_args().iter().cloned())
            .build()
    }
}

/// Arguments forwarded to the spawned JVM.
///
/// JVM options (`-J`) go before `-jar`/`-cp`; application arguments (after `--`) go last.
#[derive(Debug, Clone, Default, Args)]
pub struct PassthroughArgs {
    /// JVM argument placed before -jar/-cp (repeatable), e.g. `-J -Xmx512m`.
    #[arg(
        short = 'J',
        long = "java-opt",
        value_name = "JVM_ARG",
        allow_hyphen_values = true,
        action = ArgAction::Append
    )]
    java_opts: Vec<String>,
    /// Application arguments after `--`, appended to the end of the command.
    #[arg(last = true, value_name = "APP_ARGS")]
    app_args: Vec<String>,
}

impl PassthroughArgs {
    pub fn new(java_opts: Vec<String>, app_args: Vec<String>) -> Self {
        Self {
            java_opts,
            app_args,
        }
    }

    pub fn java_opts(&self) -> &[String] {
        &self.java_opts
    }

    pub fn app_args(&self) -> &[String] {
        &self.app_args
    }

    /// Reject application arguments that would override launcher-owned flags.
    /// JVM options are not checked.
    pub fn validate(&self) -> Result<(), PassthroughError> {
        validate_app_args(&self.app_args)
    }
}

fn parse_operation_arg(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    if key.starts_with('-') {
        return Err(format!("omit leading dashes from the key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_log_level(raw: &str) -> Result<String, String> {
    if is_supported_log_level(raw) {
        return Ok(raw.to_string());
    }
    Err(format!(
        "unsupported log level `{raw}` (use TRACE, DEBUG, INFO, WARN, ERROR or OFF)"
    ))
}
