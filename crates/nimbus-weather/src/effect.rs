//! Particle and sound descriptors, and the sinks that consume them.
//!
//! Sinks are fire-and-forget: the engine pushes descriptors and never reads
//! anything back. Rendering and audio back-ends implement the traits.

use glam::DVec3;

use crate::storm::SoundId;

/// Visual appearance of a splash particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Rain or snow hitting the ground.
    RainSplash,
    /// Hissing steam or dust puff.
    Smoke,
    /// Glowing ember flicked up from hot rock.
    LavaSpark,
}

/// A particle to spawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpawn {
    pub kind: ParticleKind,
    pub position: DVec3,
}

/// Mixer channel a sound plays on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCategory {
    Weather,
}

/// A positional sound to play this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundSpawn {
    pub sound: SoundId,
    pub category: SoundCategory,
    pub position: DVec3,
    pub volume: f32,
    pub pitch: f32,
    /// Whether volume falls off with distance from the listener.
    pub attenuated: bool,
}

/// Receives particles from weather effects.
pub trait ParticleSink {
    fn add_particle(&mut self, particle: ParticleSpawn);
}

/// Receives positional sounds from weather effects.
pub trait AudioSink {
    fn play_sound(&mut self, sound: SoundSpawn);
}

/// A back-end that takes both particles and sounds.
pub trait EffectSink: ParticleSink + AudioSink {}

impl<T: ParticleSink + AudioSink> EffectSink for T {}

/// Sink that records everything it receives, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectLog {
    pub particles: Vec<ParticleSpawn>,
    pub sounds: Vec<SoundSpawn>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops everything recorded so far, keeping the allocations.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.sounds.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.sounds.is_empty()
    }
}

impl ParticleSink for EffectLog {
    fn add_particle(&mut self, particle: ParticleSpawn) {
        self.particles.push(particle);
    }
}

impl AudioSink for EffectLog {
    fn play_sound(&mut self, sound: SoundSpawn) {
        self.sounds.push(sound);
    }
}
