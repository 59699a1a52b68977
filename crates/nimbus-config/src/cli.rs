//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, QualityTier};

/// Nimbus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "nimbus", about = "Weather splash effect simulator")]
pub struct CliArgs {
    /// Splash particles per frame at full storm strength.
    #[arg(long)]
    pub particle_count: Option<u32>,

    /// Particle quality tier.
    #[arg(long, value_enum)]
    pub quality: Option<QualityTier>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 200)]
    pub frames: u64,

    /// Frame counter of the first simulated frame.
    #[arg(long, default_value_t = 0)]
    pub seed_frame: u64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(count) = args.particle_count {
            self.weather.particle_count_base = count;
        }
        if let Some(quality) = args.quality {
            self.weather.quality = quality;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
