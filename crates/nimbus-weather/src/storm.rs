//! Storm intensity levels and the sounds that go with them.

/// Identifier of a sound asset, e.g. `"block.lava.pop"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoundId(pub &'static str);

impl SoundId {
    /// Popping bubble played over hot rock.
    pub const LAVA_POP: Self = Self("block.lava.pop");
    /// The host's own ambient rain loop.
    pub const VANILLA_RAIN: Self = Self("ambient.weather.rain");
}

/// How hard it is currently storming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StormIntensity {
    /// Leave the host's rain untouched.
    Vanilla,
    Calm,
    Light,
    Normal,
    Heavy,
}

impl StormIntensity {
    /// Sound of rain landing on the ground.
    pub fn storm_sound(self) -> SoundId {
        match self {
            StormIntensity::Vanilla => SoundId::VANILLA_RAIN,
            StormIntensity::Calm => SoundId("nimbus:rain.calm"),
            StormIntensity::Light => SoundId("nimbus:rain.light"),
            StormIntensity::Normal => SoundId("nimbus:rain.normal"),
            StormIntensity::Heavy => SoundId("nimbus:rain.heavy"),
        }
    }

    /// Sound of wind-blown dust in dust-bearing biomes.
    pub fn dust_sound(self) -> SoundId {
        match self {
            StormIntensity::Vanilla | StormIntensity::Calm => SoundId("nimbus:dust.calm"),
            StormIntensity::Light => SoundId("nimbus:dust.light"),
            StormIntensity::Normal => SoundId("nimbus:dust.normal"),
            StormIntensity::Heavy => SoundId("nimbus:dust.heavy"),
        }
    }
}

/// Storm state supplied by the host each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StormState {
    pub intensity: StormIntensity,
    /// Base volume of storm sounds in `[0, 1]` before noise drift.
    pub current_volume: f32,
}

impl StormState {
    pub fn new(intensity: StormIntensity, current_volume: f32) -> Self {
        Self {
            intensity,
            current_volume,
        }
    }

    /// Whether the host's own rain rendering and sound should be left alone.
    pub fn is_vanilla(&self) -> bool {
        self.intensity == StormIntensity::Vanilla
    }
}

impl Default for StormState {
    fn default() -> Self {
        Self::new(StormIntensity::Normal, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanilla_storm_keeps_host_rain() {
        let storm = StormState::new(StormIntensity::Vanilla, 0.3);
        assert!(storm.is_vanilla());
        assert_eq!(storm.intensity.storm_sound(), SoundId::VANILLA_RAIN);
        assert!(!StormState::default().is_vanilla());
    }

    #[test]
    fn test_intensities_have_distinct_sounds() {
        let levels = [
            StormIntensity::Calm,
            StormIntensity::Light,
            StormIntensity::Normal,
            StormIntensity::Heavy,
        ];
        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(a.storm_sound(), b.storm_sound());
                assert_ne!(a.dust_sound(), b.dust_sound());
            }
            assert_ne!(a.storm_sound(), a.dust_sound());
        }
    }
}
