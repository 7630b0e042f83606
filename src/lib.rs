//! rn-toolbox: app icons, splashscreens and `.env` switching for React Native projects.

pub mod app_config;
pub mod cli;
pub mod commands;
pub mod contents_json;
pub mod imaging;
pub mod sizes;

pub use cli::errors::{CommandError, ExitCode};
pub use cli::runner::run_cli;

/// Binary name used in usage lines and version output.
pub const CLI_BIN: &str = env!("CARGO_PKG_NAME");

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
