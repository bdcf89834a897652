//! CLI argument definitions and `Invocation` construction.
use std::path::PathBuf;

use clap::Parser;

use super::{parse_directives, to_raw_command_line, Invocation};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Resolve, save, and launch Unreal project configurations",
    long_about = "Resolve, save, and launch Unreal project configurations.\n\nDirectives:\n  -e <FILE>     Load a saved launch config and open it for editing.\n  -c <FILE>     Load a saved launch config and launch it.\n  -g <PROJECT>  Derive a launch config from a .uproject and save it next to the project.\n\nWith no directives the empty config is opened for editing.",
    after_help = "Hint: run `ue-launcher -g path/to/Game.uproject` once, then `ue-launcher -c path/to/LaunchConf_0.uejson` to start the editor."
)]
pub struct LauncherArgs {
    /// Path to launcher.toml (overrides UE_LAUNCHER_SETTINGS).
    #[arg(long = "settings", value_name = "FILE")]
    pub settings_override: Option<PathBuf>,
    /// Launch directives (`-e`, `-c`, `-g`), each followed by its argument.
    #[arg(
        value_name = "DIRECTIVES",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub directives: Vec<String>,
}

impl LauncherArgs {
    /// The directive arguments re-joined as one raw command line.
    pub fn raw_command_line(&self) -> String {
        to_raw_command_line(&self.directives)
    }

    pub fn into_invocation(self) -> Invocation {
        let raw_command_line = self.raw_command_line();
        let directives = parse_directives(&raw_command_line);
        Invocation {
            settings_override: self.settings_override,
            raw_command_line,
            directives,
        }
    }
}
