//! Shared library modules providing error types, runtime lookup, shell quoting, and telemetry.

pub mod errors;
pub mod runtime;
pub mod shell;
pub mod telemetry;
