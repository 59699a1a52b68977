//! World model for weather effects: block and biome value types, the read-only
//! [`WorldQuery`] oracle, and an in-memory [`GridWorld`] implementation.

pub mod biome;
pub mod block;
pub mod grid;
pub mod query;

pub use biome::{BiomeDef, BiomeId, BiomeRegistry, BiomeRegistryError};
pub use block::{BlockKind, BlockState, Material};
pub use grid::{GridWorld, Layer};
pub use query::{DimensionId, WorldQuery};
