//! Splash sound volume: a base storm volume plus slow simplex-noise drift
//! over the course of the day.

use noise::{NoiseFn, Simplex};

/// Seed of the process-wide volume noise field.
pub const VOLUME_NOISE_SEED: u32 = 0x5EED_0F2A;

/// 2D simplex noise evaluator returning values in roughly `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct VolumeNoise {
    simplex: Simplex,
}

impl VolumeNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
        }
    }

    /// Noise value at `(x, y)`. Continuous in both inputs.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }
}

impl Default for VolumeNoise {
    fn default() -> Self {
        Self::new(VOLUME_NOISE_SEED)
    }
}

/// Splash sound volume for the current time of day.
///
/// `clamp(base + noise(angle * 240 - 60, 1) / 5, 0, 1)`: at most a fifth of
/// full scale of drift around the storm's base volume.
pub fn rain_volume(noise: &VolumeNoise, celestial_angle: f32, base_volume: f32) -> f32 {
    let drift = noise.evaluate(f64::from(celestial_angle) * 240.0 - 60.0, 1.0) / 5.0;
    (f64::from(base_volume) + drift).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_same_seed() {
        let a = VolumeNoise::new(42);
        let b = VolumeNoise::new(42);
        for i in 0..100 {
            let x = i as f64 * 0.37 - 20.0;
            assert_eq!(a.evaluate(x, 1.0), b.evaluate(x, 1.0));
        }
    }

    #[test]
    fn test_values_are_bounded() {
        let noise = VolumeNoise::default();
        for i in 0..2_000 {
            let x = i as f64 * 0.173 - 60.0;
            let v = noise.evaluate(x, 1.0);
            assert!(v.is_finite());
            assert!((-1.5..=1.5).contains(&v), "noise out of range at {x}: {v}");
        }
    }

    #[test]
    fn test_continuous_across_integer_boundaries() {
        let noise = VolumeNoise::default();
        let step = 1e-4;
        for cell in -30..30 {
            let x = cell as f64;
            let left = noise.evaluate(x - step, 1.0);
            let right = noise.evaluate(x + step, 1.0);
            assert!(
                (left - right).abs() < 0.01,
                "jump at x={x}: {left} vs {right}"
            );
        }
    }

    #[test]
    fn test_rain_volume_stays_in_unit_range() {
        let noise = VolumeNoise::default();
        for i in 0..500 {
            let angle = i as f32 / 500.0;
            for base in [0.0, 0.05, 0.5, 0.95, 1.0] {
                let v = rain_volume(&noise, angle, base);
                assert!((0.0..=1.0).contains(&v), "volume {v} for base {base}");
            }
        }
    }

    #[test]
    fn test_rain_volume_drifts_near_base() {
        let noise = VolumeNoise::default();
        for i in 0..500 {
            let angle = i as f32 / 500.0;
            let v = rain_volume(&noise, angle, 0.5);
            assert!((v - 0.5).abs() <= 0.3, "drift too large at {angle}: {v}");
        }
    }

    #[test]
    fn test_rain_volume_changes_smoothly_between_frames() {
        let noise = VolumeNoise::default();
        // One frame of a 24000-tick day.
        let tick = 1.0 / 24_000.0;
        let mut previous = rain_volume(&noise, 0.0, 0.5);
        for i in 1..2_000 {
            let v = rain_volume(&noise, i as f32 * tick, 0.5);
            assert!((v - previous).abs() < 0.05, "volume jumped at tick {i}");
            previous = v;
        }
    }
}
