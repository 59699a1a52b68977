//! Synthetic worlds for the demo.

use glam::IVec3;
use nimbus_world::{BiomeDef, BlockKind, DimensionId, GridWorld};
use tracing::warn;

/// Flat grassland with a desert strip to the east, a tundra strip to the
/// west, a lava pool and a stone roof next to the spawn point.
pub fn overworld() -> GridWorld {
    let mut world = GridWorld::new(
        DimensionId::OVERWORLD,
        BiomeDef::new("plains", 0.8, true, false),
    )
    .with_layer(0, 59, BlockKind::Stone)
    .with_layer(60, 62, BlockKind::Dirt)
    .with_layer(63, 63, BlockKind::Grass);

    let desert = world.register_biome(BiomeDef::new("desert", 2.0, false, true));
    let tundra = world.register_biome(BiomeDef::new("tundra", 0.0, true, false));
    match (desert, tundra) {
        (Ok(desert), Ok(tundra)) => {
            for z in -12..=12 {
                for x in 5..=12 {
                    world.set_column_biome(x, z, desert);
                    world.set_block(IVec3::new(x, 63, z), BlockKind::Sand);
                }
                for x in -12..=-5 {
                    world.set_column_biome(x, z, tundra);
                }
            }
        }
        (Err(e), _) | (_, Err(e)) => warn!("skipping biome strips: {e}"),
    }

    for x in -3..=-1 {
        for z in 2..=4 {
            world.set_block(IVec3::new(x, 63, z), BlockKind::Lava);
        }
    }
    for x in 1..=3 {
        for z in -3..=-1 {
            world.set_block(IVec3::new(x, 67, z), BlockKind::TopSlab);
        }
    }
    world
}

/// Cavern dimension: netherrack floor and ceiling with a dusty wasteland.
pub fn nether() -> GridWorld {
    let mut world = GridWorld::new(DimensionId::NETHER, BiomeDef::new("hell", 2.0, false, true))
        .with_layer(0, 30, BlockKind::Lava)
        .with_layer(31, 63, BlockKind::Netherrack)
        .with_layer(110, 127, BlockKind::Netherrack);
    for x in -2..=2 {
        for z in -2..=2 {
            world.set_block(IVec3::new(x, 63, z), BlockKind::SoulSand);
        }
    }
    world
}
