//! The splash engine: dispatch table, settings and cross-frame state.

use nimbus_config::WeatherConfig;
use nimbus_world::WorldQuery;
use tracing::info;

use crate::dispatch::SplashDispatch;
use crate::effect::EffectSink;
use crate::frame::{FrameInput, SplashEnv, SplashSettings, SplashState};
use crate::volume::VolumeNoise;

/// Renders rain and dust splashes, one call per frame.
pub struct SplashEngine {
    dispatch: SplashDispatch,
    settings: SplashSettings,
    noise: VolumeNoise,
    state: SplashState,
}

impl SplashEngine {
    pub fn new(settings: SplashSettings, dispatch: SplashDispatch) -> Self {
        info!(
            base = settings.particle_count_base,
            quality = ?settings.quality,
            dimensions = dispatch.len(),
            "splash engine ready"
        );
        Self {
            dispatch,
            settings,
            noise: VolumeNoise::default(),
            state: SplashState::new(),
        }
    }

    /// Engine with the standard dispatch table and settings from `config`.
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(SplashSettings::from(config), SplashDispatch::with_defaults())
    }

    /// Renders one frame of splashes for `world` into `sink`.
    pub fn render_frame(
        &mut self,
        world: &dyn WorldQuery,
        input: &FrameInput,
        sink: &mut dyn EffectSink,
    ) {
        let variant = self.dispatch.resolve(world.dimension());
        let mut env = SplashEnv {
            world,
            input,
            settings: &self.settings,
            noise: &self.noise,
            state: &mut self.state,
            sink,
        };
        variant.simulate(&mut env);
    }

    pub fn settings(&self) -> &SplashSettings {
        &self.settings
    }

    pub fn dispatch(&self) -> &SplashDispatch {
        &self.dispatch
    }

    /// Mutable access for startup-time variant registration.
    pub fn dispatch_mut(&mut self) -> &mut SplashDispatch {
        &mut self.dispatch
    }

    pub fn state(&self) -> &SplashState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SplashState {
        &mut self.state
    }
}
