//! Frame driver: runs every registered effect handler once per frame.

use nimbus_config::WeatherConfig;
use nimbus_world::WorldQuery;
use tracing::{debug, info};

use crate::effect::EffectSink;
use crate::engine::SplashEngine;
use crate::frame::FrameInput;

/// An effect that runs once per frame while a world is loaded.
pub trait EffectHandler {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn process(&mut self, world: &dyn WorldQuery, input: &FrameInput, sink: &mut dyn EffectSink);
}

impl EffectHandler for SplashEngine {
    fn name(&self) -> &'static str {
        "splash"
    }

    fn process(&mut self, world: &dyn WorldQuery, input: &FrameInput, sink: &mut dyn EffectSink) {
        self.render_frame(world, input, sink);
    }
}

/// Ordered list of effect handlers driven from the host's frame start.
#[derive(Default)]
pub struct EffectDriver {
    handlers: Vec<Box<dyn EffectHandler>>,
}

impl EffectDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver with the handlers enabled in `config`.
    pub fn from_config(config: &WeatherConfig) -> Self {
        let mut driver = Self::new();
        if config.enable_splashes {
            driver.register(Box::new(SplashEngine::from_config(config)));
        }
        info!(handlers = driver.len(), "effect driver ready");
        driver
    }

    /// Appends a handler. Handlers run in registration order.
    pub fn register(&mut self, handler: Box<dyn EffectHandler>) {
        debug!(handler = handler.name(), "registered effect handler");
        self.handlers.push(handler);
    }

    /// Runs all handlers for one frame. Skips the frame when no world is loaded.
    pub fn on_frame_start(
        &mut self,
        world: Option<&dyn WorldQuery>,
        input: &FrameInput,
        sink: &mut dyn EffectSink,
    ) {
        let Some(world) = world else {
            return;
        };
        for handler in &mut self.handlers {
            handler.process(world, input, sink);
        }
    }

    pub fn handler_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|h| h.name())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
