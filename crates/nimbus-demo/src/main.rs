//! Headless demo of the Nimbus splash engine.
//!
//! Builds small synthetic worlds, drives the effect driver for a number of
//! frames through a rising storm, and logs what was emitted.
//!
//! Run with `cargo run -p nimbus-demo -- --frames 400 --quality fast`.

mod scenes;

use std::collections::HashMap;

use clap::Parser;
use glam::DVec3;
use nimbus_config::{CliArgs, Config, default_config_dir};
use nimbus_weather::{
    EffectDriver, EffectLog, FrameInput, ParticleKind, RainSoundOverride, SoundCategory, SoundId,
    SoundSpawn, StormIntensity, StormState,
};
use nimbus_world::{GridWorld, WorldQuery};
use tracing::{debug, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    nimbus_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Weather: base={} quality={:?} sound={}",
        config.weather.particle_count_base,
        config.weather.quality,
        config.weather.enable_splash_sound
    );

    let mut driver = EffectDriver::from_config(&config.weather);

    let mut overworld = scenes::overworld();
    run_storm(&mut driver, &mut overworld, &args, DVec3::new(0.5, 64.0, 0.5));

    let mut nether = scenes::nether();
    run_storm(&mut driver, &mut nether, &args, DVec3::new(0.5, 64.0, 0.5));

    demonstrate_rain_override(&RainSoundOverride::from_config(&config.weather));
    Ok(())
}

/// Drives `args.frames` frames of a storm that builds up over the first half.
fn run_storm(driver: &mut EffectDriver, world: &mut GridWorld, args: &CliArgs, viewer: DVec3) {
    let mut log = EffectLog::new();
    let mut particles: HashMap<ParticleKind, usize> = HashMap::new();
    let mut sounds: HashMap<SoundId, usize> = HashMap::new();
    let ramp = (args.frames / 2).max(1);

    for i in 0..args.frames {
        let frame = args.seed_frame + i;
        world.set_rain_strength(i as f32 / ramp as f32);
        world.set_celestial_angle((frame % 24_000) as f32 / 24_000.0);

        let strength = world.rain_strength();
        let storm = StormState::new(intensity_for(strength), 0.4 + strength * 0.4);
        let input = FrameInput::new(frame, viewer, storm);

        log.clear();
        driver.on_frame_start(Some(&*world), &input, &mut log);

        for p in &log.particles {
            *particles.entry(p.kind).or_default() += 1;
        }
        for s in &log.sounds {
            *sounds.entry(s.sound).or_default() += 1;
            debug!(
                frame,
                sound = s.sound.0,
                volume = s.volume,
                pitch = s.pitch,
                "splash sound at ({:.1}, {:.1}, {:.1})",
                s.position.x,
                s.position.y,
                s.position.z
            );
        }
    }

    info!(
        "{:?}: {} frames, particles {:?}, sounds {:?}",
        world.dimension(),
        args.frames,
        particles,
        sounds
    );
}

fn intensity_for(strength: f32) -> StormIntensity {
    match strength {
        s if s < 0.25 => StormIntensity::Calm,
        s if s < 0.5 => StormIntensity::Light,
        s if s < 0.85 => StormIntensity::Normal,
        _ => StormIntensity::Heavy,
    }
}

fn demonstrate_rain_override(rain_override: &RainSoundOverride) {
    let vanilla = SoundSpawn {
        sound: SoundId::VANILLA_RAIN,
        category: SoundCategory::Weather,
        position: DVec3::new(0.5, 64.0, 0.5),
        volume: 0.2,
        pitch: 1.0,
        attenuated: true,
    };
    for intensity in [StormIntensity::Vanilla, StormIntensity::Heavy] {
        let storm = StormState::new(intensity, 0.8);
        match rain_override.intercept(&vanilla, &storm) {
            Some(replaced) => info!("{intensity:?}: rain loop replaced by {}", replaced.sound.0),
            None => info!("{intensity:?}: rain loop left alone"),
        }
    }
}
