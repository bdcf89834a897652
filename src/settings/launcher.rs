use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::SettingsError;

use super::EngineTable;

pub const DEFAULT_CONFIG_EXTENSION: &str = "uejson";

/// `[launcher]` section: persistence and tool selection knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSection {
    /// Extension of saved `LaunchConf_<N>` files, without the dot.
    pub extension: String,
    /// Forces the tool name instead of probing the engine binaries.
    pub tool: Option<String>,
    /// Installation key used when a project records no association.
    pub default_engine: Option<String>,
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            extension: DEFAULT_CONFIG_EXTENSION.to_string(),
            tool: None,
            default_engine: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLauncherSection {
    pub extension: Option<String>,
    pub tool: Option<String>,
    pub default_engine: Option<String>,
}

pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    engines: &EngineTable,
    path: &Path,
) -> Result<LauncherSection, SettingsError> {
    let launcher_raw = raw.unwrap_or_default();

    let extension = launcher_raw
        .extension
        .map(|ext| ext.trim_start_matches('.').to_string())
        .unwrap_or_else(|| DEFAULT_CONFIG_EXTENSION.to_string());
    validate_extension(path, &extension)?;

    let tool = launcher_raw.tool.map(|tool| tool.trim().to_string());
    if matches!(tool.as_deref(), Some("")) {
        return Err(SettingsError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.tool",
            message: "Tool name cannot be empty; remove the key to auto-detect".into(),
        });
    }

    let default_engine = launcher_raw.default_engine;
    if let Some(key) = default_engine.as_deref() {
        if engines.get(key).is_none() {
            return Err(SettingsError::InvalidField {
                path: path.to_path_buf(),
                field: "launcher.default_engine",
                message: format!("`{key}` is not listed under [engines]"),
            });
        }
    }

    Ok(LauncherSection {
        extension,
        tool,
        default_engine,
    })
}

fn validate_extension(path: &Path, extension: &str) -> Result<(), SettingsError> {
    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(SettingsError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.extension",
            message: format!("Use a non-empty alphanumeric extension: {extension:?}"),
        });
    }
    Ok(())
}
