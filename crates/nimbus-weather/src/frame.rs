//! Frame inputs, persistent engine state, and the particle budget.

use glam::DVec3;
use nimbus_config::{QualityTier, WeatherConfig};
use nimbus_world::WorldQuery;

use crate::effect::EffectSink;
use crate::rng::SplashRng;
use crate::storm::StormState;
use crate::volume::VolumeNoise;

/// Engine settings fixed at construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashSettings {
    /// Columns sampled per frame at full storm strength.
    pub particle_count_base: u32,
    pub quality: QualityTier,
    /// Whether the throttled splash sound may play.
    pub sound_enabled: bool,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self::from(&WeatherConfig::default())
    }
}

impl From<&WeatherConfig> for SplashSettings {
    fn from(config: &WeatherConfig) -> Self {
        Self {
            particle_count_base: config.particle_count_base,
            quality: config.quality,
            sound_enabled: config.enable_splash_sound,
        }
    }
}

/// What the host knows about the frame being rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Monotonic frame counter; seeds all randomness of the frame.
    pub frame_counter: u64,
    /// Eye position of the viewer.
    pub viewer: DVec3,
    pub storm: StormState,
}

impl FrameInput {
    pub fn new(frame_counter: u64, viewer: DVec3, storm: StormState) -> Self {
        Self {
            frame_counter,
            viewer,
            storm,
        }
    }
}

/// State that survives from one frame to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplashState {
    /// Splashing frames since the splash sound last played.
    pub sound_counter: u32,
}

impl SplashState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sound_counter(sound_counter: u32) -> Self {
        Self { sound_counter }
    }
}

/// Everything a variant needs to run one frame.
pub struct SplashEnv<'a> {
    pub world: &'a dyn WorldQuery,
    pub input: &'a FrameInput,
    pub settings: &'a SplashSettings,
    pub noise: &'a VolumeNoise,
    pub state: &'a mut SplashState,
    pub sink: &'a mut dyn EffectSink,
}

/// Single-pass uniform choice of one splash position.
///
/// The `n`th offered position replaces the held one with probability `1/n`,
/// so each of `N` offers ends up held with probability `1/N`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reservoir {
    seen: u32,
    held: Option<DVec3>,
}

impl Reservoir {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, position: DVec3, rng: &mut SplashRng) {
        self.seen += 1;
        if rng.next_int(self.seen) == 0 {
            self.held = Some(position);
        }
    }

    /// Number of positions offered so far.
    pub fn seen(&self) -> u32 {
        self.seen
    }

    /// The chosen position, `None` until something has been offered.
    pub fn held(&self) -> Option<DVec3> {
        self.held
    }
}

/// Storm strength after the quality tier is applied.
///
/// Anything below fancy quality sees the storm at half strength.
pub fn intensity_factor(rain_strength: f32, quality: QualityTier) -> f32 {
    let strength = rain_strength.clamp(0.0, 1.0);
    match quality {
        QualityTier::Fancy => strength,
        QualityTier::Fast | QualityTier::Off => strength / 2.0,
    }
}

/// Columns to sample this frame: `round(base * factor^2)`, halved again on
/// the fast tier and zero when particles are off.
pub fn particle_budget(particle_count_base: u32, factor: f32, quality: QualityTier) -> u32 {
    let budget = (particle_count_base as f32 * factor * factor).round() as u32;
    match quality {
        QualityTier::Fancy => budget,
        QualityTier::Fast => budget >> 1,
        QualityTier::Off => 0,
    }
}
