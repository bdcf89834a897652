//! One-shot dispatch of parsed directives to their handlers.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    cli::DirectiveMap,
    lib::{errors::DispatchError, paths::to_absolute, telemetry::DirectiveSpan},
    settings::LauncherSettings,
};

use super::{
    codec, ConfigModel, ConfigPersistence, EngineResolver, InteractiveFlow, LaunchReceipt,
    ProcessLauncher,
};

/// Recognized directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `-e <file>`: load a saved config and open it for editing.
    LoadAndEdit,
    /// `-c <file>`: load a saved config and launch it.
    LoadAndLaunch,
    /// `-g <project>`: derive a config from a project and save it.
    DeriveFromProject,
}

impl Directive {
    pub const ALL: [Directive; 3] = [
        Directive::LoadAndEdit,
        Directive::LoadAndLaunch,
        Directive::DeriveFromProject,
    ];

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|directive| directive.key() == key)
    }

    pub const fn key(&self) -> char {
        match self {
            Directive::LoadAndEdit => 'e',
            Directive::LoadAndLaunch => 'c',
            Directive::DeriveFromProject => 'g',
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Directive::LoadAndEdit => "load_and_edit",
            Directive::LoadAndLaunch => "load_and_launch",
            Directive::DeriveFromProject => "derive_from_project",
        }
    }
}

/// What a successful handler did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveOutcome {
    Opened(ConfigModel),
    Launched(LaunchReceipt),
    Saved { path: PathBuf, config: ConfigModel },
}

/// One fired directive and its result.
#[derive(Debug)]
pub struct DirectiveResult {
    pub directive: Directive,
    pub input: String,
    pub result: Result<DirectiveOutcome, DispatchError>,
}

/// Everything a dispatch run did. `interactive` is set when any handler (or the
/// no-directive fallback) opened the interactive flow.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub results: Vec<DirectiveResult>,
    pub interactive: bool,
}

impl DispatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &DispatchError> {
        self.results
            .iter()
            .filter_map(|entry| entry.result.as_ref().err())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Routes directives to the resolver, persistence, launcher, and interactive flow.
pub struct LaunchDispatcher<L, F> {
    resolver: EngineResolver,
    persistence: ConfigPersistence,
    launcher: L,
    flow: F,
}

impl<L: ProcessLauncher, F: InteractiveFlow> LaunchDispatcher<L, F> {
    pub fn new(
        resolver: EngineResolver,
        persistence: ConfigPersistence,
        launcher: L,
        flow: F,
    ) -> Self {
        Self {
            resolver,
            persistence,
            launcher,
            flow,
        }
    }

    /// Build the resolver and persistence from launcher settings.
    pub fn from_settings(settings: LauncherSettings, launcher: L, flow: F) -> Self {
        let persistence = ConfigPersistence::new(settings.launcher.extension.clone());
        Self::new(EngineResolver::new(settings), persistence, launcher, flow)
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Fire each recognized directive once, in map order. With no directives at all the
    /// interactive flow opens on an empty config.
    pub fn dispatch(&mut self, directives: &DirectiveMap) -> DispatchReport {
        let mut report = DispatchReport::default();

        if directives.is_empty() {
            self.flow.open(ConfigModel::default());
            report.interactive = true;
            return report;
        }

        for (&key, input) in directives {
            let Some(directive) = Directive::from_key(key) else {
                debug!(
                    target: "ue_launcher::dispatch",
                    directive = %key,
                    "Ignoring unrecognized directive"
                );
                continue;
            };

            let span = DirectiveSpan::start(key, directive.as_str(), input);
            let result = span.in_scope(|| self.run(directive, input));
            span.finish(if result.is_ok() { "ok" } else { "failed" });

            if matches!(result, Ok(DirectiveOutcome::Opened(_))) {
                report.interactive = true;
            }
            report.results.push(DirectiveResult {
                directive,
                input: input.clone(),
                result,
            });
        }

        report
    }

    fn run(&mut self, directive: Directive, input: &str) -> Result<DirectiveOutcome, DispatchError> {
        match directive {
            Directive::LoadAndEdit => {
                let config = load_config(input);
                self.flow.open(config.clone());
                Ok(DirectiveOutcome::Opened(config))
            }
            Directive::LoadAndLaunch => {
                let config = load_config(input);
                self.launcher
                    .launch(&config)
                    .map(DirectiveOutcome::Launched)
                    .map_err(|source| DispatchError::Launch {
                        directive: directive.key(),
                        input: input.to_string(),
                        source,
                    })
            }
            Directive::DeriveFromProject => {
                let config =
                    self.resolver
                        .resolve(input)
                        .map_err(|source| DispatchError::Resolution {
                            directive: directive.key(),
                            input: input.to_string(),
                            source,
                        })?;
                let directory = self.resolver.project_directory(input);
                let path = self
                    .persistence
                    .save(&config, &directory)
                    .map_err(|source| DispatchError::Persistence {
                        directive: directive.key(),
                        input: input.to_string(),
                        source,
                    })?;
                Ok(DirectiveOutcome::Saved { path, config })
            }
        }
    }
}

fn load_config(input: &str) -> ConfigModel {
    codec::load_or_default(&to_absolute(Path::new(input.trim())))
}
