use std::process::ExitCode;

use anyhow::Error;

use crate::{
    cli::Invocation,
    launch::{ConsoleFlow, DispatchReport, LaunchDispatcher, SystemLauncher},
    lib::{
        platform,
        telemetry::{emit_dispatch_summary, DispatchTelemetry},
    },
    settings::LauncherSettings,
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Load settings, register the file association, and dispatch the invocation's directives.
pub fn run(invocation: Invocation) -> Result<DispatchReport, RuntimeExit> {
    let settings =
        LauncherSettings::load(invocation.settings_override.clone()).map_err(RuntimeExit::from_error)?;
    platform::register_file_association(&settings.launcher.extension);

    let settings_path = settings
        .source_path
        .as_ref()
        .map(|path| path.display().to_string());
    let mut dispatcher =
        LaunchDispatcher::from_settings(settings, SystemLauncher, ConsoleFlow::stdout());
    let report = dispatcher.dispatch(&invocation.directives);

    emit_dispatch_summary(&DispatchTelemetry {
        raw_command_line: &invocation.raw_command_line,
        settings_path: settings_path.as_deref(),
        directives: invocation.directives.len(),
        fired: report.results.len(),
        failed: report.failures().count(),
        interactive: report.interactive,
    });

    if report.is_success() {
        return Ok(report);
    }
    Err(failure_exit(report))
}

fn failure_exit(report: DispatchReport) -> RuntimeExit {
    let message = report
        .results
        .into_iter()
        .filter_map(|entry| entry.result.err())
        .map(|err| format!("error: {:#}", Error::new(err)))
        .collect::<Vec<_>>()
        .join("\n");
    RuntimeExit::new(message, ExitCode::FAILURE)
}
