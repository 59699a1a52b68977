//! Replacement of the host's ambient rain loop with the current storm sound.

use nimbus_config::WeatherConfig;

use crate::effect::SoundSpawn;
use crate::storm::{SoundId, StormState};

/// Swaps the host's vanilla rain sound for the storm's own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RainSoundOverride {
    /// Replace even when the storm is in vanilla mode.
    pub always_override: bool,
}

impl RainSoundOverride {
    pub fn new(always_override: bool) -> Self {
        Self { always_override }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.always_override_sound)
    }

    /// The sound to play instead of `sound`, or `None` to let it through.
    ///
    /// Only the vanilla rain loop is replaced. The replacement keeps the
    /// original pitch and position and takes the storm's sound and volume.
    pub fn intercept(&self, sound: &SoundSpawn, storm: &StormState) -> Option<SoundSpawn> {
        if sound.sound != SoundId::VANILLA_RAIN {
            return None;
        }
        if !self.always_override && storm.is_vanilla() {
            return None;
        }
        Some(SoundSpawn {
            sound: storm.intensity.storm_sound(),
            volume: storm.current_volume,
            ..*sound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::SoundCategory;
    use crate::storm::StormIntensity;
    use glam::DVec3;

    fn vanilla_rain() -> SoundSpawn {
        SoundSpawn {
            sound: SoundId::VANILLA_RAIN,
            category: SoundCategory::Weather,
            position: DVec3::new(3.0, 65.0, -2.0),
            volume: 0.2,
            pitch: 0.8,
            attenuated: true,
        }
    }

    #[test]
    fn test_rain_replaced_with_storm_sound() {
        let storm = StormState::new(StormIntensity::Heavy, 0.9);
        let replaced = RainSoundOverride::new(false)
            .intercept(&vanilla_rain(), &storm)
            .unwrap();
        assert_eq!(replaced.sound, StormIntensity::Heavy.storm_sound());
        assert_eq!(replaced.volume, 0.9);
        assert_eq!(replaced.pitch, 0.8);
        assert_eq!(replaced.position, vanilla_rain().position);
    }

    #[test]
    fn test_other_sounds_pass_through() {
        let storm = StormState::new(StormIntensity::Heavy, 0.9);
        let pop = SoundSpawn {
            sound: SoundId::LAVA_POP,
            ..vanilla_rain()
        };
        assert_eq!(RainSoundOverride::new(true).intercept(&pop, &storm), None);
    }

    #[test]
    fn test_vanilla_storm_left_alone_unless_forced() {
        let storm = StormState::new(StormIntensity::Vanilla, 0.5);
        assert_eq!(
            RainSoundOverride::new(false).intercept(&vanilla_rain(), &storm),
            None
        );
        assert!(
            RainSoundOverride::new(true)
                .intercept(&vanilla_rain(), &storm)
                .is_some()
        );
    }

    #[test]
    fn test_from_config() {
        let config = WeatherConfig {
            always_override_sound: true,
            ..WeatherConfig::default()
        };
        assert!(RainSoundOverride::from_config(&config).always_override);
    }
}
