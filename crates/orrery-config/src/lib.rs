//! Configuration system for the Orrery visualization.
//!
//! Settings persist to disk as a RON file in the platform config directory
//! and can be overridden per-run from the command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SceneConfig, SimConfig, WindowConfig, default_config_dir};
pub use error::ConfigError;
