//! Guard against application arguments that collide with launcher-owned flags.

use thiserror::Error;

/// Why a prefix is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedKind {
    /// Every key under the prefix belongs to the launcher.
    Namespace,
    /// A single framework key the launcher relies on.
    SafetyFlag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedPrefix {
    pub prefix: &'static str,
    pub kind: ReservedKind,
}

/// Checked in order; the first match wins. Prefixes are stored lowercase.
pub const RESERVED_APP_ARG_PREFIXES: &[ReservedPrefix] = &[
    ReservedPrefix {
        prefix: "--flamingock.",
        kind: ReservedKind::Namespace,
    },
    ReservedPrefix {
        prefix: "--spring.main.web-application-type",
        kind: ReservedKind::SafetyFlag,
    },
    ReservedPrefix {
        prefix: "--spring.main.banner-mode",
        kind: ReservedKind::SafetyFlag,
    },
];

/// Rejection of a user-supplied application argument.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PassthroughError {
    #[error(
        "Reserved argument cannot be passed after '--': {arg}\n\n  {}\n\n  For help: jar-launch --help",
        category_message(.reserved)
    )]
    ReservedArgument {
        arg: String,
        reserved: ReservedPrefix,
    },
}

impl PassthroughError {
    pub fn arg(&self) -> &str {
        match self {
            PassthroughError::ReservedArgument { arg, .. } => arg,
        }
    }

    pub fn kind(&self) -> ReservedKind {
        match self {
            PassthroughError::ReservedArgument { reserved, .. } => reserved.kind,
        }
    }
}

fn category_message(reserved: &ReservedPrefix) -> String {
    match reserved.kind {
        ReservedKind::Namespace => format!(
            "Arguments starting with '{}' are controlled by the CLI and cannot be overridden.",
            reserved.prefix
        ),
        ReservedKind::SafetyFlag => format!(
            "The argument '{}' is a safety-critical flag controlled by the CLI.",
            reserved.prefix
        ),
    }
}

/// Return the reserved prefix `arg` starts with, ignoring case.
pub fn reserved_prefix_for(arg: &str) -> Option<ReservedPrefix> {
    let lowered = arg.to_lowercase();
    RESERVED_APP_ARG_PREFIXES
        .iter()
        .find(|reserved| lowered.starts_with(reserved.prefix))
        .copied()
}

/// Reject the first application argument that starts with a reserved prefix.
///
/// Runtime (JVM) arguments are intentionally not passed here: they sit below the
/// application's configuration layer. Operation-argument keys are not checked either.
pub fn validate_app_args(app_args: &[String]) -> Result<(), PassthroughError> {
    for arg in app_args {
        if let Some(reserved) = reserved_prefix_for(arg) {
            return Err(PassthroughError::ReservedArgument {
                arg: arg.clone(),
                reserved,
            });
        }
    }
    Ok(())
}
