use tracing::{debug, info};

use super::{LauncherSettings, SettingsSource, DEFAULT_SETTINGS_PATH, SETTINGS_ENV_KEY};

pub fn log_source(path: &std::path::Path, source: SettingsSource) {
    match source {
        SettingsSource::Cli => info!(
            target: "ue_launcher::settings",
            path = %path.display(),
            "Loading settings from --settings"
        ),
        SettingsSource::Env => info!(
            target: "ue_launcher::settings",
            path = %path.display(),
            "Loading settings using UE_LAUNCHER_SETTINGS environment variable"
        ),
        SettingsSource::Default => debug!(
            target: "ue_launcher::settings",
            path = %path.display(),
            env = SETTINGS_ENV_KEY,
            default = DEFAULT_SETTINGS_PATH,
            "UE_LAUNCHER_SETTINGS not set; trying default launcher.toml"
        ),
    }
}

pub fn log_defaults() {
    debug!(
        target: "ue_launcher::settings",
        "No launcher.toml found; using built-in defaults"
    );
}

pub fn log_loaded(settings: &LauncherSettings) {
    info!(
        target: "ue_launcher::settings",
        path = ?settings.source_path.as_deref().map(|p| p.display().to_string()),
        extension = %settings.launcher.extension,
        tool = ?settings.launcher.tool,
        default_engine = ?settings.launcher.default_engine,
        engines = settings.engines.len(),
        "Settings file loaded successfully"
    );
}
