//! Configuration for the Nimbus weather effects.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap. The splash engine reads them once at construction.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, QualityTier, WeatherConfig, default_config_dir};
pub use error::ConfigError;
