//! Telemetry initialization and launch-planning span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use crate::launch::Variant;

/// Initialize `tracing`. Logs go to stderr so stdout carries only the planned command.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one launch plan.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    launch_id: Uuid,
}

impl LaunchSpan {
    pub fn start(variant: Variant, artifact_path: &str) -> Self {
        let launch_id = Uuid::new_v4();
        let span = info_span!(
            target: "jar_launch::launch",
            "launch_plan",
            %launch_id,
            variant = variant.as_str(),
            artifact = artifact_path
        );
        Self {
            span,
            started_at: Instant::now(),
            launch_id,
        }
    }

    pub fn launch_id(&self) -> Uuid {
        self.launch_id
    }

    /// Close the span while recording the outcome.
    pub fn finish(self, status: &'static str, token_count: usize) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        info!(
            target: "jar_launch::launch",
            launch_id = %self.launch_id,
            status = status,
            token_count = token_count,
            elapsed_us = elapsed_us,
            "Finished launch plan"
        );
    }
}
