//! In-memory world oracle built from horizontal layers plus sparse overrides.
//!
//! Layers give whole-world bands of one block (bedrock floor, ground, a
//! cavern ceiling). Individual cells and per-column biomes are stored in
//! hash maps on top. Good enough for tests and the demo, not for real maps.

use glam::{IVec2, IVec3};
use rustc_hash::FxHashMap;

use crate::{
    BiomeDef, BiomeId, BiomeRegistry, BiomeRegistryError, BlockState, DimensionId, WorldQuery,
};

/// Height above which biome temperature starts dropping.
pub const TEMPERATURE_FALLOFF_START: i32 = 64;

/// Temperature lost per block above [`TEMPERATURE_FALLOFF_START`].
pub const TEMPERATURE_FALLOFF_PER_BLOCK: f32 = 0.05 / 30.0;

/// A horizontal band `[bottom, top]` filled with one block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub bottom: i32,
    pub top: i32,
    pub block: BlockState,
}

impl Layer {
    fn contains(&self, y: i32) -> bool {
        (self.bottom..=self.top).contains(&y)
    }
}

/// A layered, sparse, in-memory [`WorldQuery`] implementation.
pub struct GridWorld {
    dimension: DimensionId,
    layers: Vec<Layer>,
    blocks: FxHashMap<IVec3, BlockState>,
    /// Highest y ever written through [`GridWorld::set_block`].
    placed_top: i32,
    biomes: BiomeRegistry,
    default_biome: BiomeId,
    column_biomes: FxHashMap<IVec2, BiomeId>,
    has_weather: bool,
    rain_strength: f32,
    celestial_angle: f32,
}

impl GridWorld {
    /// Creates an empty world whose every column uses `default_biome`.
    pub fn new(dimension: DimensionId, default_biome: BiomeDef) -> Self {
        let mut biomes = BiomeRegistry::new();
        let default_biome = biomes
            .register(default_biome)
            .unwrap_or(BiomeId(0));
        Self {
            dimension,
            layers: Vec::new(),
            blocks: FxHashMap::default(),
            placed_top: i32::MIN,
            biomes,
            default_biome,
            column_biomes: FxHashMap::default(),
            has_weather: true,
            rain_strength: 0.0,
            celestial_angle: 0.0,
        }
    }

    /// Adds a band of `block` covering `bottom..=top`. Later layers win.
    pub fn with_layer(mut self, bottom: i32, top: i32, block: impl Into<BlockState>) -> Self {
        self.layers.push(Layer {
            bottom,
            top,
            block: block.into(),
        });
        self
    }

    /// Overrides a single cell.
    pub fn set_block(&mut self, pos: IVec3, block: impl Into<BlockState>) {
        self.placed_top = self.placed_top.max(pos.y);
        self.blocks.insert(pos, block.into());
    }

    /// Registers an extra biome.
    pub fn register_biome(&mut self, def: BiomeDef) -> Result<BiomeId, BiomeRegistryError> {
        self.biomes.register(def)
    }

    /// Assigns a biome to the column `(x, z)`.
    pub fn set_column_biome(&mut self, x: i32, z: i32, biome: BiomeId) {
        self.column_biomes.insert(IVec2::new(x, z), biome);
    }

    /// The biome every unassigned column reports.
    pub fn default_biome(&self) -> BiomeId {
        self.default_biome
    }

    pub fn set_has_weather(&mut self, has_weather: bool) {
        self.has_weather = has_weather;
    }

    pub fn set_rain_strength(&mut self, strength: f32) {
        self.rain_strength = strength.clamp(0.0, 1.0);
    }

    pub fn set_celestial_angle(&mut self, angle: f32) {
        self.celestial_angle = angle;
    }

    fn biome_def(&self, id: BiomeId) -> Option<&BiomeDef> {
        self.biomes.get(id)
    }

    /// Highest y that can hold anything other than air.
    fn top_y(&self) -> Option<i32> {
        let layer_top = self.layers.iter().map(|l| l.top).max();
        match (layer_top, self.placed_top) {
            (None, i32::MIN) => None,
            (None, placed) => Some(placed),
            (Some(top), placed) => Some(top.max(placed)),
        }
    }

    fn bottom_y(&self) -> i32 {
        self.layers.iter().map(|l| l.bottom).min().unwrap_or(0).min(0)
    }
}

impl WorldQuery for GridWorld {
    fn dimension(&self) -> DimensionId {
        self.dimension
    }

    fn block_at(&self, pos: IVec3) -> BlockState {
        if let Some(block) = self.blocks.get(&pos) {
            return *block;
        }
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.contains(pos.y))
            .map(|layer| layer.block)
            .unwrap_or(BlockState::AIR)
    }

    fn biome_at(&self, pos: IVec3) -> BiomeId {
        self.column_biomes
            .get(&IVec2::new(pos.x, pos.z))
            .copied()
            .unwrap_or(self.default_biome)
    }

    fn temperature_at(&self, pos: IVec3) -> f32 {
        let base = self
            .biome_def(self.biome_at(pos))
            .map(|def| def.temperature)
            .unwrap_or(0.5);
        if pos.y > TEMPERATURE_FALLOFF_START {
            base - (pos.y - TEMPERATURE_FALLOFF_START) as f32 * TEMPERATURE_FALLOFF_PER_BLOCK
        } else {
            base
        }
    }

    fn has_precipitation(&self, biome: BiomeId) -> bool {
        self.biome_def(biome).is_some_and(|def| def.precipitation)
    }

    fn biome_has_dust(&self, biome: BiomeId) -> bool {
        self.biome_def(biome).is_some_and(|def| def.dust)
    }

    fn has_weather(&self) -> bool {
        self.has_weather
    }

    fn surface_height(&self, x: i32, z: i32) -> i32 {
        let bottom = self.bottom_y();
        let Some(top) = self.top_y() else {
            return bottom;
        };
        (bottom..=top)
            .rev()
            .find(|&y| {
                self.block_at(IVec3::new(x, y, z))
                    .material
                    .blocks_precipitation()
            })
            .map_or(bottom, |y| y + 1)
    }

    fn rain_strength(&self) -> f32 {
        self.rain_strength
    }

    fn celestial_angle(&self) -> f32 {
        self.celestial_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockKind;

    fn plains() -> BiomeDef {
        BiomeDef::new("plains", 0.8, true, false)
    }

    fn flat_world() -> GridWorld {
        GridWorld::new(DimensionId::OVERWORLD, plains())
            .with_layer(0, 62, BlockKind::Stone)
            .with_layer(63, 63, BlockKind::Grass)
    }

    #[test]
    fn test_layers_and_overrides() {
        let mut world = flat_world();
        assert_eq!(world.block_at(IVec3::new(3, 10, 3)).kind, BlockKind::Stone);
        assert_eq!(world.block_at(IVec3::new(3, 63, 3)).kind, BlockKind::Grass);
        assert!(world.block_at(IVec3::new(3, 64, 3)).is_air());

        world.set_block(IVec3::new(3, 64, 3), BlockKind::Glass);
        assert_eq!(world.block_at(IVec3::new(3, 64, 3)).kind, BlockKind::Glass);
    }

    #[test]
    fn test_surface_height_is_above_top_blocking_cell() {
        let mut world = flat_world();
        assert_eq!(world.surface_height(0, 0), 64);

        world.set_block(IVec3::new(0, 70, 0), BlockKind::Leaves);
        // Leaves do not stop rain.
        assert_eq!(world.surface_height(0, 0), 64);

        world.set_block(IVec3::new(0, 72, 0), BlockKind::Water);
        assert_eq!(world.surface_height(0, 0), 73);
        assert_eq!(world.surface_height(1, 0), 64);
    }

    #[test]
    fn test_empty_world_surface_is_floor() {
        let world = GridWorld::new(DimensionId::END, plains());
        assert_eq!(world.surface_height(5, 5), 0);
    }

    #[test]
    fn test_temperature_falls_with_altitude() {
        let world = flat_world();
        let low = world.temperature_at(IVec3::new(0, 64, 0));
        let high = world.temperature_at(IVec3::new(0, 124, 0));
        assert_eq!(low, 0.8);
        assert!((high - (0.8 - 0.1)).abs() < 1e-5, "got {high}");
    }

    #[test]
    fn test_column_biomes() {
        let mut world = flat_world();
        let desert = world
            .register_biome(BiomeDef::new("desert", 2.0, false, true))
            .unwrap();
        world.set_column_biome(4, -2, desert);

        assert_eq!(world.biome_at(IVec3::new(4, 0, -2)), desert);
        assert_eq!(world.biome_at(IVec3::new(4, 90, -2)), desert);
        assert_eq!(world.biome_at(IVec3::new(0, 0, 0)), world.default_biome());
        assert!(world.biome_has_dust(desert));
        assert!(!world.has_precipitation(desert));
        assert!(world.has_precipitation(world.default_biome()));
    }

    #[test]
    fn test_rain_strength_is_clamped() {
        let mut world = flat_world();
        world.set_rain_strength(3.0);
        assert_eq!(world.rain_strength(), 1.0);
        world.set_rain_strength(-1.0);
        assert_eq!(world.rain_strength(), 0.0);
    }
}
