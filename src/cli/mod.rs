//! CLI front-end: parse options, validate passthrough arguments, and print the planned command.
use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::LauncherConfig,
    launch::{Launcher, PassthroughError, Variant},
    lib::{runtime::resolve_java_executable, shell, telemetry::LaunchSpan},
};

pub mod args;
pub mod exit;

pub use args::{LaunchArgs, OutputFormat, PassthroughArgs};
pub use exit::{CliExit, FAILURE_EXIT_CODE, USAGE_EXIT_CODE};

/// Command ready to hand to a process spawner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub variant: Variant,
    pub command: Vec<String>,
}

impl LaunchPlan {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Shell => Ok(shell::join(&self.command)),
        }
    }
}

/// Build a [`Launcher`] from configuration, resolving the java executable.
pub fn launcher_from_config(config: &LauncherConfig) -> Launcher {
    let executable = resolve_java_executable(config.runtime.executable.as_deref());
    Launcher::new(executable).with_entry_point(config.bundle.entry_point.clone())
}

/// Validate passthrough arguments, then build the command.
///
/// Nothing is built when validation fails.
pub fn plan_launch(
    args: &LaunchArgs,
    launcher: &Launcher,
    config: &LauncherConfig,
) -> Result<LaunchPlan, PassthroughError> {
    let span = LaunchSpan::start(args.variant, &args.jar);

    if let Err(rejection) = args.passthrough.validate() {
        warn!(
            target: "jar_launch::launch",
            launch_id = %span.launch_id(),
            arg = rejection.arg(),
            kind = ?rejection.kind(),
            "Rejected reserved application argument"
        );
        span.finish("rejected", 0);
        return Err(rejection);
    }

    let request = args.to_request(config.launch.default_log_level.as_deref());
    let command = launcher.build_command(&request, args.variant);
    info!(
        target: "jar_launch::launch",
        launch_id = %span.launch_id(),
        executable = launcher.runtime_executable(),
        runtime_args = request.runtime_args.len(),
        operation_args = request.operation_args.len(),
        app_args = request.app_args.len(),
        "Planned launch command"
    );
    span.finish("planned", command.len());

    Ok(LaunchPlan {
        variant: args.variant,
        command,
    })
}

/// Run the CLI and return the text to print on stdout.
pub fn execute_cli_command(args: LaunchArgs) -> Result<String> {
    // Reject reserved arguments before touching configuration.
    args.passthrough.validate()?;

    let config = LauncherConfig::load(args.config_override.clone())?;
    let launcher = launcher_from_config(&config);
    let plan = plan_launch(&args, &launcher, &config)?;
    plan.render(args.format)
}
