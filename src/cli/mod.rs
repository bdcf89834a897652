//! CLI entrypoint module structure.
use std::path::PathBuf;

pub mod args;
pub mod directives;

pub use args::LauncherArgs;
pub use directives::{parse_directives, to_raw_command_line, DirectiveMap};

/// Parsed process invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub settings_override: Option<PathBuf>,
    pub raw_command_line: String,
    pub directives: DirectiveMap,
}
