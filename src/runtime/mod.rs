//! Process-level run loop: settings, file association, dispatch, exit status.
mod startup;

pub use startup::{run, RuntimeExit};
