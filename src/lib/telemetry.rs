//! Telemetry initialization and directive span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one directive handler.
pub struct DirectiveSpan {
    span: Span,
    started_at: Instant,
    directive: char,
}

impl DirectiveSpan {
    /// Start a directive span.
    pub fn start(directive: char, kind: &'static str, input: &str) -> Self {
        let span = info_span!(
            target: "ue_launcher::dispatch",
            "directive",
            %directive,
            kind,
            input
        );
        Self {
            span,
            started_at: Instant::now(),
            directive,
        }
    }

    /// Run `f` inside the span.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        self.span.in_scope(f)
    }

    /// Close the span while recording status.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "ue_launcher::dispatch",
            directive = %self.directive,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed directive"
        );
    }
}

/// Summary of one dispatch run, logged as structured telemetry.
#[derive(Debug)]
pub struct DispatchTelemetry<'a> {
    pub raw_command_line: &'a str,
    pub settings_path: Option<&'a str>,
    pub directives: usize,
    pub fired: usize,
    pub failed: usize,
    pub interactive: bool,
}

/// Emit a dispatch summary to `tracing`.
pub fn emit_dispatch_summary(telemetry: &DispatchTelemetry<'_>) {
    info!(
        target: "ue_launcher::runtime",
        raw_command_line = telemetry.raw_command_line,
        settings_path = telemetry.settings_path.unwrap_or("<defaults>"),
        directives = telemetry.directives,
        fired = telemetry.fired,
        failed = telemetry.failed,
        interactive = telemetry.interactive,
        "Finished dispatch"
    );
}
