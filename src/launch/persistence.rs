//! Save launch configs as `LaunchConf_<N>.<ext>` without touching existing files.
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::lib::errors::PersistenceError;

use super::{codec, ConfigModel};

/// File stem shared by every saved launch config.
pub const FILE_PREFIX: &str = "LaunchConf_";
/// Number of indices probed before giving up.
pub const SLOT_LIMIT: u32 = 100;

/// Writes configs into a project directory using the first free slot.
#[derive(Debug, Clone)]
pub struct ConfigPersistence {
    extension: String,
}

impl ConfigPersistence {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path of slot `index` inside `directory`.
    pub fn slot_path(&self, directory: &Path, index: u32) -> PathBuf {
        directory.join(format!("{FILE_PREFIX}{index}.{}", self.extension))
    }

    /// Write `config` to the lowest free slot and return its path.
    ///
    /// Slots are claimed with create-new semantics, so a file that appears between
    /// probes is skipped rather than overwritten.
    pub fn save(&self, config: &ConfigModel, directory: &Path) -> Result<PathBuf, PersistenceError> {
        let text = codec::serialize(config)?;

        for index in 0..SLOT_LIMIT {
            let path = self.slot_path(directory, index);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(
                        target: "ue_launcher::persistence",
                        path = %path.display(),
                        "Slot taken"
                    );
                    continue;
                }
                Err(source) => return Err(PersistenceError::Write { path, source }),
            };

            let written = file.write_all(text.as_bytes()).and_then(|_| file.sync_all());
            drop(file);
            finish_slot(&path, written)?;

            info!(
                target: "ue_launcher::persistence",
                path = %path.display(),
                index,
                "Saved launch config"
            );
            return Ok(path);
        }

        Err(PersistenceError::Exhausted {
            directory: directory.to_path_buf(),
            limit: SLOT_LIMIT,
        })
    }
}

/// A slot whose write failed is removed so it never loads as an empty config.
fn finish_slot(path: &Path, written: io::Result<()>) -> Result<(), PersistenceError> {
    written.map_err(|source| {
        if let Err(err) = fs::remove_file(path) {
            warn!(
                target: "ue_launcher::persistence",
                path = %path.display(),
                error = %err,
                "Failed to remove partially written slot"
            );
        }
        PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}
