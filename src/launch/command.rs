//! Builds the ordered argument list for a JVM launch.

use super::{LaunchRequest, Variant};

/// Entry-point class used for flat bundles when config does not name one.
pub const DEFAULT_ENTRY_POINT: &str = "io.flamingock.cli.FlamingockCliEntryPoint";

pub const JAR_FLAG: &str = "-jar";
pub const CLASSPATH_FLAG: &str = "-cp";

pub const WEB_APPLICATION_NONE_FLAG: &str = "--spring.main.web-application-type=none";
pub const CLI_PROFILE_FLAG: &str = "--spring.profiles.include=flamingock-cli";
pub const CLI_MODE_FLAG: &str = "--flamingock.cli.mode=true";
pub const BANNER_OFF_FLAG: &str = "--spring.main.banner-mode=off";

pub const OPERATION_KEY: &str = "--flamingock.operation=";
pub const OUTPUT_FILE_KEY: &str = "--flamingock.output-file=";
pub const MANAGED_LOG_LEVEL_KEY: &str = "--logging.level.root=";
pub const FLAT_LOG_LEVEL_KEY: &str = "--flamingock.log.level=";

/// Prefix shared by every flag owned by the managed runtime framework.
pub const MANAGED_FRAMEWORK_PREFIX: &str = "--spring.";

/// Immutable launcher settings resolved before any command is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    runtime_executable: String,
    entry_point: String,
}

impl Launcher {
    pub fn new(runtime_executable: impl Into<String>) -> Self {
        Self {
            runtime_executable: runtime_executable.into(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn runtime_executable(&self) -> &str {
        &self.runtime_executable
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Build the command for `variant`. The variant is the only input that picks the layout.
    pub fn build_command(&self, request: &LaunchRequest, variant: Variant) -> Vec<String> {
        match variant {
            Variant::ManagedRuntimeBundle => self.build_managed_bundle_command(request),
            Variant::FlatExecutableBundle => self.build_flat_bundle_command(request),
        }
    }

    /// `java [runtime args] -jar <artifact> <framework flags> [generated flags] [app args]`
    pub fn build_managed_bundle_command(&self, request: &LaunchRequest) -> Vec<String> {
        let mut command = self.command_prefix(request);
        command.push(JAR_FLAG.to_string());
        command.push(request.artifact_path.clone());

        command.push(WEB_APPLICATION_NONE_FLAG.to_string());
        command.push(CLI_PROFILE_FLAG.to_string());
        command.push(CLI_MODE_FLAG.to_string());
        command.push(BANNER_OFF_FLAG.to_string());

        push_generated_flags(&mut command, request, MANAGED_LOG_LEVEL_KEY);
        command.extend(request.app_args.iter().cloned());
        command
    }

    /// `java [runtime args] -cp <artifact> <entry point> --flamingock.cli.mode=true [...]`
    pub fn build_flat_bundle_command(&self, request: &LaunchRequest) -> Vec<String> {
        let mut command = self.command_prefix(request);
        command.push(CLASSPATH_FLAG.to_string());
        command.push(request.artifact_path.clone());
        command.push(self.entry_point.clone());

        command.push(CLI_MODE_FLAG.to_string());

        push_generated_flags(&mut command, request, FLAT_LOG_LEVEL_KEY);
        command.extend(request.app_args.iter().cloned());
        command
    }

    fn command_prefix(&self, request: &LaunchRequest) -> Vec<String> {
        let mut command = Vec::with_capacity(
            request.runtime_args.len()
                + request.operation_args.len()
                + request.app_args.len()
                + 12,
        );
        command.push(self.runtime_executable.clone());
        // Runtime args configure the JVM itself, so they must precede -jar/-cp.
        command.extend(request.runtime_args.iter().cloned());
        command
    }
}

fn push_generated_flags(command: &mut Vec<String>, request: &LaunchRequest, log_level_key: &str) {
    if let Some(operation) = request.operation() {
        command.push(format!("{OPERATION_KEY}{operation}"));
    }
    if let Some(output_file) = request.output_file() {
        command.push(format!("{OUTPUT_FILE_KEY}{output_file}"));
    }
    if let Some(level) = request.log_level() {
        command.push(format!("{log_level_key}{}", level.to_uppercase()));
    }
    for (key, value) in &request.operation_args {
        command.push(format!("--{key}={value}"));
    }
}
