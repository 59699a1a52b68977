//! Per-dimension splash behaviour.
//!
//! A [`SplashVariant`] supplies the three decisions that differ between
//! dimensions: where precipitation lands, what particle it makes, and what it
//! sounds like. Every method has a default, so a variant only overrides what
//! it changes. The frame loop itself lives in [`crate::simulate`].

use glam::IVec2;
use nimbus_world::{BlockState, WorldQuery};

use crate::effect::ParticleKind;
use crate::frame::SplashEnv;
use crate::height::{ColumnHeight, enclosed_height, native_height};
use crate::policy::{default_particle, default_sound};
use crate::rng::SplashRng;
use crate::simulate::simulate_splashes;
use crate::storm::{SoundId, StormState};

/// Splash behaviour for one kind of dimension.
///
/// Variants hold no per-frame state and are shared across frames.
pub trait SplashVariant: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Where precipitation lands in `column`.
    fn precipitation_height(
        &self,
        world: &dyn WorldQuery,
        range: i32,
        column: IVec2,
        viewer_y: i32,
    ) -> ColumnHeight {
        let _ = (range, viewer_y);
        native_height(world, column)
    }

    /// Particle for a splash landing on `state`.
    fn block_particle(
        &self,
        state: &BlockState,
        dust: bool,
        rng: &mut SplashRng,
    ) -> Option<ParticleKind> {
        default_particle(state, dust, rng)
    }

    /// Sound for a splash landing on `block`.
    fn block_sound(&self, block: &BlockState, dust: bool, storm: &StormState) -> Option<SoundId> {
        default_sound(block, dust, storm)
    }

    /// Runs one frame of splashes.
    fn simulate(&self, env: &mut SplashEnv<'_>) {
        simulate_splashes(self, env);
    }
}

/// Open-sky rain and snow.
#[derive(Clone, Copy, Debug, Default)]
pub struct StormSplash;

impl SplashVariant for StormSplash {
    fn name(&self) -> &'static str {
        "storm"
    }
}

/// Enclosed, hot cavern dimension: only dust storms, settling as smoke.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetherSplash;

impl SplashVariant for NetherSplash {
    fn name(&self) -> &'static str {
        "nether"
    }

    fn precipitation_height(
        &self,
        world: &dyn WorldQuery,
        range: i32,
        column: IVec2,
        viewer_y: i32,
    ) -> ColumnHeight {
        enclosed_height(world, column, range, viewer_y)
    }

    fn block_particle(
        &self,
        _state: &BlockState,
        dust: bool,
        _rng: &mut SplashRng,
    ) -> Option<ParticleKind> {
        dust.then_some(ParticleKind::Smoke)
    }

    fn block_sound(&self, _block: &BlockState, dust: bool, storm: &StormState) -> Option<SoundId> {
        dust.then(|| storm.intensity.dust_sound())
    }
}

/// Dimensions without weather. Does no work at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSplash;

impl SplashVariant for NullSplash {
    fn name(&self) -> &'static str {
        "none"
    }

    fn simulate(&self, _env: &mut SplashEnv<'_>) {}
}
