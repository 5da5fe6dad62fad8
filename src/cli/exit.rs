use std::process::ExitCode;

use anyhow::Error;

use crate::launch::PassthroughError;

/// Exit code for input the user has to fix (reserved passthrough arguments).
pub const USAGE_EXIT_CODE: u8 = 2;
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Bundles a failure message with the process exit code.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    exit_code: u8,
}

impl CliExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        if let Some(rejected) = err.downcast_ref::<PassthroughError>() {
            return Self {
                message: rejected.to_string(),
                exit_code: USAGE_EXIT_CODE,
            };
        }
        Self {
            message: format!("{err:?}"),
            exit_code: FAILURE_EXIT_CODE,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }
}
