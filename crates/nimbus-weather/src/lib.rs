//! Rain, snow and dust splash effects for voxel worlds.
//!
//! Once per frame the [`SplashEngine`] picks the [`SplashVariant`] for the
//! viewer's dimension, samples columns around the viewer, spawns splash
//! particles where precipitation lands, and now and then plays one splash
//! sound at a uniformly chosen splash. All randomness of a frame comes from a
//! single stream seeded by the frame counter, so frames replay exactly.

pub mod ambient;
pub mod dispatch;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod frame;
pub mod height;
pub mod policy;
pub mod rng;
pub mod simulate;
pub mod storm;
pub mod variant;
pub mod volume;

pub use ambient::RainSoundOverride;
pub use dispatch::SplashDispatch;
pub use driver::{EffectDriver, EffectHandler};
pub use effect::{
    AudioSink, EffectLog, EffectSink, ParticleKind, ParticleSink, ParticleSpawn, SoundCategory,
    SoundSpawn,
};
pub use engine::SplashEngine;
pub use frame::{
    FrameInput, Reservoir, SplashEnv, SplashSettings, SplashState, intensity_factor,
    particle_budget,
};
pub use height::{ColumnHeight, SENTINEL_HEIGHT, enclosed_height, native_height};
pub use rng::SplashRng;
pub use simulate::{PARTICLE_SOUND_CHANCE, RANGE, simulate_splashes};
pub use storm::{SoundId, StormIntensity, StormState};
pub use variant::{NetherSplash, NullSplash, SplashVariant, StormSplash};
pub use volume::{VolumeNoise, rain_volume};
