//! Start the resolved tool binary without waiting on it.
use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::info;

use crate::lib::{errors::LaunchError, paths::to_absolute, platform};

use super::ConfigModel;

/// What was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub pid: Option<u32>,
}

/// Starts the tool named by a [`ConfigModel`].
pub trait ProcessLauncher {
    fn launch(&self, config: &ConfigModel) -> Result<LaunchReceipt, LaunchError>;
}

/// Spawns real processes from the platform binaries directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Binary and argument list for `config`, after checking the binary is runnable.
    pub fn plan(config: &ConfigModel) -> Result<(PathBuf, Vec<String>), LaunchError> {
        if config.engine.trim().is_empty() {
            return Err(LaunchError::Unresolved { field: "engine" });
        }
        if config.tool.trim().is_empty() {
            return Err(LaunchError::Unresolved { field: "tool" });
        }

        let binary = platform::tool_binary_path(Path::new(&config.engine), &config.tool);
        if !binary.exists() {
            return Err(LaunchError::BinaryMissing { path: binary });
        }
        if !platform::is_executable(&binary) {
            return Err(LaunchError::NotExecutable { path: binary });
        }

        let args = build_launch_args(config);
        Ok((binary, args))
    }
}

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, config: &ConfigModel) -> Result<LaunchReceipt, LaunchError> {
        let (binary, args) = Self::plan(config)?;

        let mut command = Command::new(&binary);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = binary.parent() {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|source| LaunchError::Spawn {
            path: binary.clone(),
            source,
        })?;
        let pid = child.id();
        // Dropping the handle detaches the child; it is never awaited.
        drop(child);

        info!(
            target: "ue_launcher::process",
            binary = %binary.display(),
            args = ?args,
            pid,
            "Launched tool"
        );

        Ok(LaunchReceipt {
            binary,
            args,
            pid: Some(pid),
        })
    }
}

/// Project first, then any extra params. An empty project opens the tool bare.
///
/// A relative project is anchored to the launcher's working directory, since the
/// child starts inside the engine's binaries directory.
pub fn build_launch_args(config: &ConfigModel) -> Vec<String> {
    let mut args = Vec::with_capacity(config.params.len() + 1);
    if !config.project.is_empty() {
        let project = to_absolute(Path::new(&config.project));
        args.push(project.to_string_lossy().into_owned());
    }
    args.extend(config.params.iter().cloned());
    args
}
