//! The read-only world oracle consumed by weather effects.

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::{BiomeId, BlockState};

/// Identifies a dimension (a world space with its own weather rules).
///
/// Stable for the lifetime of a world session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DimensionId(pub i32);

impl DimensionId {
    /// The default surface world.
    pub const OVERWORLD: Self = Self(0);
    /// The enclosed, hot cavern dimension.
    pub const NETHER: Self = Self(-1);
    /// The weatherless void dimension.
    pub const END: Self = Self(1);
}

/// Read-only access to world, biome and weather state.
///
/// Implementations are assumed infallible for every coordinate: out-of-range
/// queries return air or a default biome rather than failing.
pub trait WorldQuery {
    /// The dimension this world belongs to.
    fn dimension(&self) -> DimensionId;

    /// The block at `pos`.
    fn block_at(&self, pos: IVec3) -> BlockState;

    /// The biome at `pos`.
    fn biome_at(&self, pos: IVec3) -> BiomeId;

    /// Temperature at `pos`, including altitude falloff.
    fn temperature_at(&self, pos: IVec3) -> f32;

    /// Whether rain or snow falls in `biome`.
    fn has_precipitation(&self, biome: BiomeId) -> bool;

    /// Whether storms in `biome` carry dust instead of water.
    fn biome_has_dust(&self, biome: BiomeId) -> bool;

    /// Whether this world simulates weather at all.
    fn has_weather(&self) -> bool;

    /// Native precipitation height: the y of the first cell above the topmost
    /// block that stops falling weather in column `(x, z)`.
    fn surface_height(&self, x: i32, z: i32) -> i32;

    /// Current rain/snow strength in `[0, 1]`.
    fn rain_strength(&self) -> f32;

    /// Sun angle as a fraction of a full day in `[0, 1)`.
    fn celestial_angle(&self) -> f32;
}
