//! Default particle, sound and pitch policies for splash sites.

use glam::DVec3;
use nimbus_world::{BlockKind, BlockState, Material, WorldQuery};

use crate::effect::ParticleKind;
use crate::rng::SplashRng;
use crate::storm::{SoundId, StormState};

/// One in this many splashes on hot rock throws a spark instead of water.
pub const SPARK_CHANCE: u32 = 20;

/// Pitch used when the viewer is sheltered and the splash is overhead.
pub const MUFFLED_PITCH: f32 = 0.5;

/// Particle for a splash landing on `state`.
///
/// Dust sites and soul sand stay quiet. Netherrack occasionally sparks,
/// lava steams, any other non-air block splashes. The spark roll only
/// consumes randomness for netherrack.
pub fn default_particle(
    state: &BlockState,
    dust: bool,
    rng: &mut SplashRng,
) -> Option<ParticleKind> {
    if dust || state.kind == BlockKind::SoulSand {
        None
    } else if state.kind == BlockKind::Netherrack && rng.next_int(SPARK_CHANCE) == 0 {
        Some(ParticleKind::LavaSpark)
    } else if state.material == Material::Lava {
        Some(ParticleKind::Smoke)
    } else if state.material != Material::Air {
        Some(ParticleKind::RainSplash)
    } else {
        None
    }
}

/// Sound for a splash landing on `block`.
pub fn default_sound(block: &BlockState, dust: bool, storm: &StormState) -> Option<SoundId> {
    if dust {
        Some(storm.intensity.dust_sound())
    } else if block.kind == BlockKind::Netherrack {
        Some(SoundId::LAVA_POP)
    } else {
        Some(storm.intensity.storm_sound())
    }
}

/// Pitch for a splash sound at height `sound_y`.
///
/// Muffled when the sound is more than a block above the viewer and the
/// viewer's own column has cover overhead.
pub fn splash_pitch(world: &dyn WorldQuery, sound_y: f64, viewer: DVec3) -> f32 {
    let viewer_block = viewer.floor().as_ivec3();
    let sheltered = world.surface_height(viewer_block.x, viewer_block.z) > viewer_block.y;
    if sound_y > viewer.y + 1.0 && sheltered {
        MUFFLED_PITCH
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storm::StormIntensity;
    use glam::IVec3;
    use nimbus_world::{BiomeDef, DimensionId, GridWorld};

    #[test]
    fn test_dust_and_soul_sand_have_no_particle() {
        let mut rng = SplashRng::new(1);
        assert_eq!(default_particle(&BlockKind::Grass.into(), true, &mut rng), None);
        assert_eq!(default_particle(&BlockKind::SoulSand.into(), false, &mut rng), None);
    }

    #[test]
    fn test_lava_smokes_and_ground_splashes() {
        let mut rng = SplashRng::new(1);
        assert_eq!(
            default_particle(&BlockKind::Lava.into(), false, &mut rng),
            Some(ParticleKind::Smoke)
        );
        assert_eq!(
            default_particle(&BlockKind::Grass.into(), false, &mut rng),
            Some(ParticleKind::RainSplash)
        );
        assert_eq!(
            default_particle(&BlockKind::Water.into(), false, &mut rng),
            Some(ParticleKind::RainSplash)
        );
        assert_eq!(default_particle(&BlockState::AIR, false, &mut rng), None);
    }

    #[test]
    fn test_netherrack_sparks_about_one_in_twenty() {
        let mut rng = SplashRng::new(77);
        let rock = BlockState::of(BlockKind::Netherrack);
        let mut sparks = 0;
        let trials = 20_000;
        for _ in 0..trials {
            match default_particle(&rock, false, &mut rng) {
                Some(ParticleKind::LavaSpark) => sparks += 1,
                Some(ParticleKind::RainSplash) => {}
                other => panic!("unexpected particle {other:?}"),
            }
        }
        assert!((800..1200).contains(&sparks), "got {sparks} sparks");
    }

    #[test]
    fn test_only_netherrack_consumes_randomness() {
        let mut a = SplashRng::new(3);
        let mut b = SplashRng::new(3);
        default_particle(&BlockKind::Stone.into(), false, &mut a);
        assert_eq!(a.next_int(1000), b.next_int(1000));
    }

    #[test]
    fn test_sound_selection() {
        let storm = StormState::new(StormIntensity::Heavy, 0.7);
        assert_eq!(
            default_sound(&BlockKind::Sand.into(), true, &storm),
            Some(StormIntensity::Heavy.dust_sound())
        );
        assert_eq!(
            default_sound(&BlockKind::Netherrack.into(), false, &storm),
            Some(SoundId::LAVA_POP)
        );
        assert_eq!(
            default_sound(&BlockKind::Grass.into(), false, &storm),
            Some(StormIntensity::Heavy.storm_sound())
        );
    }

    #[test]
    fn test_pitch_muffled_only_when_sheltered_and_overhead() {
        let mut world = GridWorld::new(
            DimensionId::OVERWORLD,
            BiomeDef::new("plains", 0.8, true, false),
        )
        .with_layer(0, 63, BlockKind::Grass);
        let viewer = DVec3::new(0.5, 64.0, 0.5);

        // Open sky above the viewer.
        assert_eq!(splash_pitch(&world, 70.0, viewer), 1.0);

        world.set_block(IVec3::new(0, 67, 0), BlockKind::Stone);
        assert_eq!(splash_pitch(&world, 70.0, viewer), MUFFLED_PITCH);
        // Sheltered, but the splash is at the viewer's feet.
        assert_eq!(splash_pitch(&world, 64.1, viewer), 1.0);
    }
}
