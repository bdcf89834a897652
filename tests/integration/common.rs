use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_ue-launcher");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Run the launcher binary from `cwd` with a clean settings environment.
pub fn run_launcher(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("UE_LAUNCHER_SETTINGS")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .output()
        .context("failed to run launcher binary")
}

/// Create `<dir>/<name>` as a `.uproject` associated with `association`.
pub fn write_project(dir: &Path, name: &str, association: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(name);
    let descriptor = serde_json::json!({
        "FileVersion": 3,
        "EngineAssociation": association,
        "Modules": [{ "Name": "Foo", "Type": "Runtime" }]
    });
    fs::write(&path, serde_json::to_string_pretty(&descriptor)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
