//! Derive the engine installation and tool binary for a `.uproject`.
use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    lib::{
        errors::ResolutionError,
        paths::{to_absolute, trim_trailing},
        platform,
    },
    settings::LauncherSettings,
};

use super::ConfigModel;

/// Editor binary name used by UE5 installations.
pub const UNREAL_EDITOR: &str = "UnrealEditor";
/// Editor binary name used by UE4 installations.
pub const UE4_EDITOR: &str = "UE4Editor";

/// The subset of a `.uproject` descriptor the resolver reads.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ProjectDescriptor {
    engine_association: Option<String>,
}

/// How an engine path was chosen; logged for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSource {
    AssociationPath,
    AssociationKey,
    SourceTree,
    DefaultEngine,
    NewestInstall,
}

impl EngineSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EngineSource::AssociationPath => "association_path",
            EngineSource::AssociationKey => "association_key",
            EngineSource::SourceTree => "source_tree",
            EngineSource::DefaultEngine => "default_engine",
            EngineSource::NewestInstall => "newest_install",
        }
    }
}

/// Resolves projects against the installations listed in [`LauncherSettings`].
#[derive(Debug, Clone)]
pub struct EngineResolver {
    settings: LauncherSettings,
}

impl EngineResolver {
    pub fn new(settings: LauncherSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    /// Directory containing the project. A directory reference resolves to itself and a
    /// bare file name to `.`.
    pub fn project_directory(&self, project: &str) -> PathBuf {
        let path = Path::new(trim_trailing(project));
        if path.is_dir() {
            return path.to_path_buf();
        }
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Engine installation root that should open `project`.
    pub fn engine_path_for_project(&self, project: &str) -> Result<PathBuf, ResolutionError> {
        self.locate_engine(project).map(|(path, _)| path)
    }

    /// Tool binary to run from `engine`: the configured override, else whichever editor
    /// binary the installation ships.
    pub fn select_tool(&self, engine: &Path) -> String {
        if let Some(tool) = &self.settings.launcher.tool {
            return tool.clone();
        }
        if platform::tool_binary_path(engine, UNREAL_EDITOR).exists() {
            UNREAL_EDITOR.to_string()
        } else {
            UE4_EDITOR.to_string()
        }
    }

    /// Build a complete [`ConfigModel`] for `project`. The stored project path is
    /// absolute so the saved config opens from any working directory.
    pub fn resolve(&self, project: &str) -> Result<ConfigModel, ResolutionError> {
        let (engine, source) = self.locate_engine(project)?;
        let tool = self.select_tool(&engine);
        let project = to_absolute(Path::new(trim_trailing(project)))
            .to_string_lossy()
            .into_owned();

        info!(
            target: "ue_launcher::resolver",
            project = %project,
            engine = %engine.display(),
            tool = %tool,
            source = source.as_str(),
            "Resolved engine for project"
        );

        Ok(ConfigModel {
            engine: engine.to_string_lossy().into_owned(),
            tool,
            project,
            params: Vec::new(),
        })
    }

    fn locate_engine(&self, project: &str) -> Result<(PathBuf, EngineSource), ResolutionError> {
        let trimmed = trim_trailing(project);
        if trimmed.trim().is_empty() {
            return Err(ResolutionError::EmptyProject);
        }
        let path = Path::new(trimmed);
        if !path.exists() {
            return Err(ResolutionError::ProjectNotFound {
                path: path.to_path_buf(),
            });
        }

        let project_dir = self.project_directory(trimmed);
        let association = if path.is_file() {
            read_association(path)?
        } else {
            None
        };

        if let Some(association) = association {
            if let Some(found) = self.lookup_association(&association, &project_dir) {
                return Ok(found);
            }
            warn!(
                target: "ue_launcher::resolver",
                project = %path.display(),
                association = %association,
                "Engine association is not installed; falling back"
            );
        }

        if let Some(root) = find_source_tree(&project_dir) {
            return Ok((root, EngineSource::SourceTree));
        }

        self.fallback_engine()
            .ok_or_else(|| ResolutionError::NoEngine {
                path: path.to_path_buf(),
            })
    }

    fn lookup_association(
        &self,
        association: &str,
        project_dir: &Path,
    ) -> Option<(PathBuf, EngineSource)> {
        let candidate = Path::new(association);
        let candidate = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            project_dir.join(candidate)
        };
        if looks_like_path(association) && candidate.is_dir() {
            return Some((candidate, EngineSource::AssociationPath));
        }

        self.settings
            .engines
            .get(association)
            .map(|install| (install.to_path_buf(), EngineSource::AssociationKey))
    }

    fn fallback_engine(&self) -> Option<(PathBuf, EngineSource)> {
        let engines = &self.settings.engines;
        if let Some(key) = self.settings.launcher.default_engine.as_deref() {
            if let Some(install) = engines.get(key) {
                return Some((install.to_path_buf(), EngineSource::DefaultEngine));
            }
        }
        engines.newest().map(|(key, install)| {
            debug!(
                target: "ue_launcher::resolver",
                key,
                "No default_engine configured; using newest installation"
            );
            (install.to_path_buf(), EngineSource::NewestInstall)
        })
    }
}

fn read_association(descriptor: &Path) -> Result<Option<String>, ResolutionError> {
    let text = fs::read_to_string(descriptor).map_err(|source| ResolutionError::DescriptorRead {
        path: descriptor.to_path_buf(),
        source,
    })?;
    let parsed: ProjectDescriptor =
        serde_json::from_str(text.trim_start_matches('\u{feff}')).map_err(|source| {
            ResolutionError::DescriptorParse {
                path: descriptor.to_path_buf(),
                source,
            }
        })?;
    Ok(parsed
        .engine_association
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

fn looks_like_path(association: &str) -> bool {
    association.contains('/') || association.contains('\\') || association.starts_with('.')
}

/// Walk up from the project directory to the first ancestor that is an engine tree.
fn find_source_tree(project_dir: &Path) -> Option<PathBuf> {
    project_dir
        .ancestors()
        .find(|dir| !dir.as_os_str().is_empty() && platform::is_engine_root(dir))
        .map(Path::to_path_buf)
}
