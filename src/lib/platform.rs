//! Engine install layout and OS integration points.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Marker file present at `<root>/Engine/Build/Build.version` in every engine tree.
pub const BUILD_VERSION_RELATIVE: &str = "Engine/Build/Build.version";

/// Platform folder under `Engine/Binaries`.
pub const fn binaries_platform() -> &'static str {
    if cfg!(target_os = "windows") {
        "Win64"
    } else if cfg!(target_os = "macos") {
        "Mac"
    } else {
        "Linux"
    }
}

/// Full path of `tool` inside the engine installation rooted at `engine`.
pub fn tool_binary_path(engine: &Path, tool: &str) -> PathBuf {
    let binaries = engine
        .join("Engine")
        .join("Binaries")
        .join(binaries_platform());
    if cfg!(target_os = "windows") {
        binaries.join(format!("{tool}.exe"))
    } else if cfg!(target_os = "macos") {
        binaries
            .join(format!("{tool}.app"))
            .join("Contents")
            .join("MacOS")
            .join(tool)
    } else {
        binaries.join(tool)
    }
}

/// Returns true if `root` looks like an engine installation.
pub fn is_engine_root(root: &Path) -> bool {
    root.join(BUILD_VERSION_RELATIVE).is_file()
}

/// Returns true if `path` may be executed by the current user.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Returns true if `path` may be executed by the current user.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Register the launch-config extension with the desktop shell.
///
/// No registrar is bundled; the call exists so packaging can hook it and is a
/// logged no-op otherwise.
pub fn register_file_association(extension: &str) {
    debug!(
        target: "ue_launcher::platform",
        extension,
        platform = binaries_platform(),
        "No file association registrar available; skipping"
    );
}
