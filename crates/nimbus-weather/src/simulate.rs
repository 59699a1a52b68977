//! The per-frame splash loop shared by all variants.

use glam::{DVec3, IVec2, IVec3};
use tracing::trace;

use nimbus_config::QualityTier;

use crate::effect::{ParticleSpawn, SoundCategory, SoundSpawn};
use crate::frame::{Reservoir, SplashEnv, intensity_factor, particle_budget};
use crate::policy::splash_pitch;
use crate::rng::SplashRng;
use crate::variant::SplashVariant;
use crate::volume::rain_volume;

/// Horizontal and vertical reach of splash sampling around the viewer.
pub const RANGE: u32 = 10;

/// Vertical half-window handed to the precipitation resolver.
pub const HEIGHT_SEARCH_RANGE: i32 = RANGE as i32 / 2;

/// A splash sound plays roughly once per this many frames with splashes.
pub const PARTICLE_SOUND_CHANCE: u32 = 20;

/// Below this temperature precipitation is snow, which does not splash.
pub const SPLASH_MIN_TEMPERATURE: f32 = 0.15;

/// Height of a splash above the surface it lands on.
pub const SURFACE_EPSILON: f64 = 0.1;

/// Runs one frame of splashes for `variant`.
///
/// Samples up to the particle budget of columns around the viewer, spawns a
/// particle on every eligible one, and occasionally plays one sound at a
/// uniformly chosen splash position.
pub fn simulate_splashes<V: SplashVariant + ?Sized>(variant: &V, env: &mut SplashEnv<'_>) {
    let quality = env.settings.quality;
    if quality == QualityTier::Off || !env.world.has_weather() {
        return;
    }

    let factor = intensity_factor(env.world.rain_strength(), quality);
    if factor <= 0.0 {
        return;
    }
    let budget = particle_budget(env.settings.particle_count_base, factor, quality);

    let mut rng = SplashRng::for_frame(env.input.frame_counter);
    let viewer = env.input.viewer.floor().as_ivec3();
    let reach = RANGE as i32;
    let mut reservoir = Reservoir::new();

    for _ in 0..budget {
        let column = IVec2::new(
            viewer.x + rng.next_int(RANGE) as i32 - rng.next_int(RANGE) as i32,
            viewer.z + rng.next_int(RANGE) as i32 - rng.next_int(RANGE) as i32,
        );
        let height =
            variant.precipitation_height(env.world, HEIGHT_SEARCH_RANGE, column, viewer.y);
        let biome = env.world.biome_at(IVec3::new(column.x, 0, column.y));
        let dust = env.world.biome_has_dust(biome);

        let Some(surface_y) = height.surface() else {
            continue;
        };
        if (surface_y - viewer.y).abs() > reach {
            continue;
        }
        let surface = IVec3::new(column.x, surface_y, column.y);
        let wet = env.world.has_precipitation(biome)
            && env.world.temperature_at(surface) >= SPLASH_MIN_TEMPERATURE;
        if !(dust || wet) {
            continue;
        }

        let below = env.world.block_at(surface - IVec3::Y);
        let position = DVec3::new(
            f64::from(column.x) + f64::from(rng.next_float()),
            f64::from(surface_y) + SURFACE_EPSILON - below.bounds_min_y,
            f64::from(column.y) + f64::from(rng.next_float()),
        );

        if let Some(kind) = variant.block_particle(&below, dust, &mut rng) {
            env.sink.add_particle(ParticleSpawn { kind, position });
        }
        reservoir.offer(position, &mut rng);
    }

    // The throttle only advances on frames that had at least one splash site.
    if let Some(anchor) = reservoir.held() {
        let counter = env.state.sound_counter;
        env.state.sound_counter = counter.saturating_add(1);
        if rng.next_int(PARTICLE_SOUND_CHANCE) < counter {
            env.state.sound_counter = 0;
            if env.settings.sound_enabled {
                play_splash_sound(variant, env, anchor);
            }
        }
    }

    trace!(
        variant = variant.name(),
        frame = env.input.frame_counter,
        budget,
        spawned = reservoir.seen(),
        "splash frame"
    );
}

/// Plays the splash sound for the block under `anchor`, if the variant has one.
fn play_splash_sound<V: SplashVariant + ?Sized>(
    variant: &V,
    env: &mut SplashEnv<'_>,
    anchor: DVec3,
) {
    let coord = anchor.floor().as_ivec3();
    let dust = env.world.biome_has_dust(env.world.biome_at(coord));
    let block = env.world.block_at(coord - IVec3::Y);
    let Some(sound) = variant.block_sound(&block, dust, &env.input.storm) else {
        return;
    };

    let volume = rain_volume(
        env.noise,
        env.world.celestial_angle(),
        env.input.storm.current_volume,
    );
    let pitch = splash_pitch(env.world, anchor.y, env.input.viewer);
    env.sink.play_sound(SoundSpawn {
        sound,
        category: SoundCategory::Weather,
        position: coord.as_dvec3() + DVec3::splat(0.5),
        volume,
        pitch,
        attenuated: false,
    });
}
