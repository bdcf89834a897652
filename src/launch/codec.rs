//! JSON text form of a [`ConfigModel`].
use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::lib::errors::CodecError;

use super::ConfigModel;

/// Encode a model as pretty-printed JSON.
pub fn serialize(config: &ConfigModel) -> Result<String, CodecError> {
    serde_json::to_string_pretty(config).map_err(|source| CodecError::Encode { source })
}

/// Decode a model. Unknown keys are ignored and absent keys take their defaults;
/// empty or truncated text is an error.
pub fn deserialize(text: &str) -> Result<ConfigModel, CodecError> {
    let trimmed = text.trim_start_matches('\u{feff}');
    if trimmed.trim().is_empty() {
        return Err(CodecError::Empty);
    }
    serde_json::from_str(trimmed).map_err(|source| CodecError::Malformed { source })
}

/// Read a saved config, degrading to an empty model on any read or parse failure.
pub fn load_or_default(path: &Path) -> ConfigModel {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                target: "ue_launcher::codec",
                path = %path.display(),
                reason = %err,
                "Failed to read launch config; starting from an empty one"
            );
            return ConfigModel::default();
        }
    };

    match deserialize(&text) {
        Ok(config) => {
            debug!(
                target: "ue_launcher::codec",
                path = %path.display(),
                engine = %config.engine,
                tool = %config.tool,
                project = %config.project,
                "Loaded launch config"
            );
            config
        }
        Err(err) => {
            warn!(
                target: "ue_launcher::codec",
                path = %path.display(),
                reason = %err,
                "Failed to parse launch config; starting from an empty one"
            );
            ConfigModel::default()
        }
    }
}
