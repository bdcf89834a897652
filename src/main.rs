//! Entry point for ue-launcher.
use std::process::ExitCode;

use clap::Parser;
use ue_launcher::{
    cli::LauncherArgs,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let invocation = LauncherArgs::parse().into_invocation();
    runtime::run(invocation).map(|_| ())
}
