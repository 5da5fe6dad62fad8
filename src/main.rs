//! Entry point for jar-launch.
use std::process::ExitCode;

use clap::Parser;
use jar_launch::{
    cli::{execute_cli_command, CliExit, LaunchArgs},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let args = LaunchArgs::parse();
    let output = execute_cli_command(args).map_err(CliExit::from_error)?;
    println!("{output}");
    Ok(())
}
