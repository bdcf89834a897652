//! Library crate root re-exporting CLI, settings, launch, and runtime modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod launch;
pub mod runtime;
pub mod settings;
