//! Shared library modules providing error types, path helpers, platform layout, and telemetry initialization.

pub mod errors;
pub mod paths;
pub mod platform;
pub mod telemetry;
