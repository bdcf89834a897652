use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::lib::{errors::SettingsError, paths::is_nonempty_absolute};

pub type RawEngineTable = BTreeMap<String, PathBuf>;

/// Known engine installations keyed by association (`"5.1"`, `"UE_5.3"`, or a build GUID).
///
/// Keys loaded through [`config`] arrive lowercased (`"ue_5.3"`, `"{2c1b...}"`), so
/// lookups ignore case and logged keys show the lowercased form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineTable {
    installs: BTreeMap<String, PathBuf>,
}

impl EngineTable {
    pub fn new(installs: BTreeMap<String, PathBuf>) -> Self {
        Self { installs }
    }

    /// Look up an installation. Keys compare case-insensitively since build GUIDs do.
    pub fn get(&self, key: &str) -> Option<&Path> {
        let key = key.trim();
        self.installs
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, path)| path.as_path())
    }

    /// Installation whose key parses as the highest dotted version.
    pub fn newest(&self) -> Option<(&str, &Path)> {
        self.installs
            .iter()
            .filter_map(|(key, path)| version_key(key).map(|version| (version, key, path)))
            .max_by(|a, b| a.0.cmp(&b.0))
            .map(|(_, key, path)| (key.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.installs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installs.is_empty()
    }
}

/// `"UE_5.1"` → `[5, 1]`; GUIDs and other labels yield `None`.
fn version_key(key: &str) -> Option<Vec<u32>> {
    let digits = key.trim_start_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    digits
        .split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

pub fn parse_engines_section(
    raw: Option<RawEngineTable>,
    path: &Path,
) -> Result<EngineTable, SettingsError> {
    let installs = raw.unwrap_or_default();
    for (key, install) in &installs {
        if key.trim().is_empty() {
            return Err(SettingsError::InvalidField {
                path: path.to_path_buf(),
                field: "engines",
                message: "Installation keys cannot be empty".into(),
            });
        }
        if !is_nonempty_absolute(install) {
            return Err(SettingsError::InvalidField {
                path: path.to_path_buf(),
                field: "engines",
                message: format!(
                    "Only absolute paths are allowed: {key} = {}",
                    install.display()
                ),
            });
        }
    }
    Ok(EngineTable::new(installs))
}
