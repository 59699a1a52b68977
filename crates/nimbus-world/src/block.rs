//! Block value types returned by the world oracle.
//!
//! A [`BlockState`] bundles the block kind, its physical [`Material`] and the
//! bottom of its bounding box. Splash code only ever reads these values; the
//! world owns the actual storage.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

/// Physical material of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Empty space.
    Air,
    /// Stone, netherrack and other hard rock.
    Rock,
    /// Dirt, grass and similar soil.
    Ground,
    /// Sand, gravel and soul sand.
    Sand,
    /// Leaves, grass tufts, flowers.
    Plant,
    /// Thin snow cover lying on top of another block.
    SnowLayer,
    /// Glass panes and blocks.
    Glass,
    /// Still or flowing water.
    Water,
    /// Still or flowing lava.
    Lava,
}

impl Material {
    /// Returns `true` for materials that stop movement.
    ///
    /// Liquids, plants and snow cover are not solid.
    pub fn is_solid(self) -> bool {
        !matches!(
            self,
            Material::Air | Material::Plant | Material::SnowLayer | Material::Water | Material::Lava
        )
    }

    /// Returns `true` for water and lava.
    pub fn is_liquid(self) -> bool {
        matches!(self, Material::Water | Material::Lava)
    }

    /// Returns `true` if falling precipitation stops on top of this material.
    pub fn blocks_precipitation(self) -> bool {
        self.is_solid() || self.is_liquid()
    }
}

// ---------------------------------------------------------------------------
// Block kinds
// ---------------------------------------------------------------------------

/// The block types the splash policies distinguish between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Air,
    Stone,
    Dirt,
    Grass,
    Sand,
    SoulSand,
    Netherrack,
    Glass,
    Leaves,
    SnowLayer,
    /// Slab occupying the upper half of its cell.
    TopSlab,
    Water,
    Lava,
}

impl BlockKind {
    /// The material a freshly placed block of this kind is made of.
    pub fn material(self) -> Material {
        match self {
            BlockKind::Air => Material::Air,
            BlockKind::Stone | BlockKind::Netherrack | BlockKind::TopSlab => Material::Rock,
            BlockKind::Dirt | BlockKind::Grass => Material::Ground,
            BlockKind::Sand | BlockKind::SoulSand => Material::Sand,
            BlockKind::Glass => Material::Glass,
            BlockKind::Leaves => Material::Plant,
            BlockKind::SnowLayer => Material::SnowLayer,
            BlockKind::Water => Material::Water,
            BlockKind::Lava => Material::Lava,
        }
    }

    /// Bottom of the block's bounding box, relative to its cell (0.0 - 1.0).
    pub fn bounds_min_y(self) -> f64 {
        match self {
            BlockKind::TopSlab => 0.5,
            _ => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Block state
// ---------------------------------------------------------------------------

/// A block as observed at one coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockState {
    /// What the block is.
    pub kind: BlockKind,
    /// What the block is made of.
    pub material: Material,
    /// Bottom of the bounding box within the cell.
    pub bounds_min_y: f64,
}

impl BlockState {
    /// Empty space.
    pub const AIR: Self = Self {
        kind: BlockKind::Air,
        material: Material::Air,
        bounds_min_y: 0.0,
    };

    /// Builds the default state for a block kind.
    pub fn of(kind: BlockKind) -> Self {
        Self {
            kind,
            material: kind.material(),
            bounds_min_y: kind.bounds_min_y(),
        }
    }

    /// Returns `true` if this cell is empty.
    pub fn is_air(&self) -> bool {
        self.material == Material::Air
    }
}

impl From<BlockKind> for BlockState {
    fn from(kind: BlockKind) -> Self {
        Self::of(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_not_solid() {
        assert!(BlockState::AIR.is_air());
        assert!(!Material::Air.is_solid());
        assert!(!Material::Air.blocks_precipitation());
    }

    #[test]
    fn test_liquids_block_precipitation_but_are_not_solid() {
        for m in [Material::Water, Material::Lava] {
            assert!(!m.is_solid(), "{m:?} must not be solid");
            assert!(m.blocks_precipitation(), "{m:?} must stop rain");
        }
    }

    #[test]
    fn test_block_state_of_uses_kind_defaults() {
        let slab = BlockState::of(BlockKind::TopSlab);
        assert_eq!(slab.material, Material::Rock);
        assert_eq!(slab.bounds_min_y, 0.5);

        let soul = BlockState::from(BlockKind::SoulSand);
        assert_eq!(soul.material, Material::Sand);
        assert!(!soul.is_air());
    }
}
