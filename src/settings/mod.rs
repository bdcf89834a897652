//! Load and validate launcher settings.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::SettingsError;

pub mod engines;
pub mod launcher;
pub mod telemetry;

pub use engines::{parse_engines_section, EngineTable, RawEngineTable};
pub use launcher::{
    parse_launcher_section, LauncherSection, RawLauncherSection, DEFAULT_CONFIG_EXTENSION,
};

const SETTINGS_ENV_KEY: &str = "UE_LAUNCHER_SETTINGS";
const DEFAULT_SETTINGS_PATH: &str = "launcher.toml";

/// Top-level settings container.
#[derive(Debug, Clone, Default)]
pub struct LauncherSettings {
    pub launcher: LauncherSection,
    pub engines: EngineTable,
    /// `None` when built-in defaults are in use.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherSettings {
    launcher: Option<RawLauncherSection>,
    engines: Option<RawEngineTable>,
}

impl LauncherSettings {
    /// Resolve the settings path in the order: CLI override → `UE_LAUNCHER_SETTINGS` → `launcher.toml`.
    ///
    /// An explicit path must exist; the implicit default may be absent, in which case the
    /// built-in defaults are returned.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let (path, source) = match override_path {
            Some(path) => (path, SettingsSource::Cli),
            None => match env::var(SETTINGS_ENV_KEY) {
                Ok(value) if !value.trim().is_empty() => {
                    (PathBuf::from(value), SettingsSource::Env)
                }
                _ => (PathBuf::from(DEFAULT_SETTINGS_PATH), SettingsSource::Default),
            },
        };

        telemetry::log_source(&path, source);
        if source == SettingsSource::Default && !path.is_file() {
            telemetry::log_defaults();
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load settings from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, SettingsError> {
        let builder = config::Config::builder().add_source(
            config::File::from(path.as_path()).format(config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = SettingsError::from_read_error(path.clone(), err);
            error!(
                target: "ue_launcher::settings",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawLauncherSettings = document.try_deserialize().map_err(|err| {
            let error = SettingsError::from_parse_error(path.clone(), err);
            error!(
                target: "ue_launcher::settings",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let settings = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "ue_launcher::settings",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    fn from_raw(raw: RawLauncherSettings, path: PathBuf) -> Result<Self, SettingsError> {
        let engines = parse_engines_section(raw.engines, &path)?;
        let launcher = parse_launcher_section(raw.launcher, &engines, &path)?;

        Ok(Self {
            launcher,
            engines,
            source_path: Some(path),
        })
    }
}

/// Where the settings path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    Cli,
    Env,
    Default,
}
