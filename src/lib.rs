pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod model;

/// Current crate version string exposed for CLI and tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, anyhow::Error>;
