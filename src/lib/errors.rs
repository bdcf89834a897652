use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the launcher settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to build (read) the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Settings file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl SettingsError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while encoding or decoding a launch configuration.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Launch configuration text is empty")]
    Empty,
    #[error("Malformed launch configuration: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode launch configuration: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Failures while deriving an engine installation for a project.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Project reference is empty")]
    EmptyProject,
    #[error("Project {path} does not exist")]
    ProjectNotFound { path: PathBuf },
    #[error("Failed to read project descriptor {path}: {source}")]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Project descriptor {path} is not valid JSON: {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No engine installation could be determined for {path}")]
    NoEngine { path: PathBuf },
}

/// Failures while writing a new `LaunchConf_<N>` file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("No free launch config slot in {directory} (indices 0..{limit} are taken)")]
    Exhausted { directory: PathBuf, limit: u32 },
    #[error("Failed to write launch config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Encode(#[from] CodecError),
}

/// Failures while starting the resolved tool binary.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Launch configuration has no `{field}`")]
    Unresolved { field: &'static str },
    #[error("Tool binary {path} does not exist")]
    BinaryMissing { path: PathBuf },
    #[error("Tool binary {path} is not executable")]
    NotExecutable { path: PathBuf },
    #[error("Failed to spawn {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A directive handler failure, tagged with the directive and its argument.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("-{directive} {input}: {source}")]
    Resolution {
        directive: char,
        input: String,
        #[source]
        source: ResolutionError,
    },
    #[error("-{directive} {input}: {source}")]
    Persistence {
        directive: char,
        input: String,
        #[source]
        source: PersistenceError,
    },
    #[error("-{directive} {input}: {source}")]
    Launch {
        directive: char,
        input: String,
        #[source]
        source: LaunchError,
    },
}
