//! Precipitation height resolution for one world column.
//!
//! Two policies exist. Open-sky worlds trust the world's native surface
//! height. Enclosed worlds (cavern dimensions with a rock ceiling) have no
//! sky-exposed surface, so a short vertical window around the viewer is
//! scanned for the first floor below an open pocket instead.

use glam::{IVec2, IVec3};
use nimbus_world::WorldQuery;

/// Height reported for columns where the enclosed scan finds no floor.
pub const SENTINEL_HEIGHT: i32 = 128;

/// Result of resolving a column's precipitation height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnHeight {
    /// First open cell above the surface precipitation lands on.
    Surface(i32),
    /// No surface inside the search window.
    Sentinel,
}

impl ColumnHeight {
    /// The y coordinate, with [`SENTINEL_HEIGHT`] for unresolved columns.
    pub fn y(self) -> i32 {
        match self {
            ColumnHeight::Surface(y) => y,
            ColumnHeight::Sentinel => SENTINEL_HEIGHT,
        }
    }

    /// The surface y, or `None` if the column has no valid splash site.
    pub fn surface(self) -> Option<i32> {
        match self {
            ColumnHeight::Surface(y) => Some(y),
            ColumnHeight::Sentinel => None,
        }
    }

    /// The resolved coordinate for `column`.
    pub fn at(self, column: IVec2) -> IVec3 {
        IVec3::new(column.x, self.y(), column.y)
    }
}

/// Native policy: the world's own surface height for the column.
pub fn native_height(world: &dyn WorldQuery, column: IVec2) -> ColumnHeight {
    ColumnHeight::Surface(world.surface_height(column.x, column.y))
}

/// Enclosed policy: scan `viewer_y + range` down to `viewer_y - range`.
///
/// The first solid cell seen after at least one air cell is the floor; the
/// cell above it is returned. Non-solid, non-air cells (liquids, plants)
/// neither open a pocket nor end the scan.
pub fn enclosed_height(
    world: &dyn WorldQuery,
    column: IVec2,
    range: i32,
    viewer_y: i32,
) -> ColumnHeight {
    let mut open_seen = false;
    for dy in (-range..=range).rev() {
        let y = viewer_y + dy;
        let state = world.block_at(IVec3::new(column.x, y, column.y));
        if state.is_air() {
            open_seen = true;
        } else if open_seen && state.material.is_solid() {
            return ColumnHeight::Surface(y + 1);
        }
    }
    ColumnHeight::Sentinel
}
