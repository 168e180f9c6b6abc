//! World↔grid coordinate conversion.

use foxden_core::Point;

/// Placement of the grid in continuous world space: the world position of
/// cell (0, 0) and the world length of one cell edge.
///
/// Callers translate their own positions into grid cells with
/// [`to_cell`](Self::to_cell) before querying the pathfinder, and map the
/// returned cells back with [`to_world`](Self::to_world).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldFrame {
    pub origin: (f32, f32),
    pub cell_size: f32,
}

impl Default for WorldFrame {
    /// Grid anchored at the world origin with unit cells.
    fn default() -> Self {
        Self {
            origin: (0.0, 0.0),
            cell_size: 1.0,
        }
    }
}

impl WorldFrame {
    /// Create a frame. `cell_size` must be positive.
    pub fn new(origin: (f32, f32), cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        Self { origin, cell_size }
    }

    /// The cell containing the world position. May fall outside any
    /// particular level's bounds; the pathfinder treats that as "no path".
    pub fn to_cell(&self, world: (f32, f32)) -> Point {
        Point::new(
            ((world.0 - self.origin.0) / self.cell_size).floor() as i32,
            ((world.1 - self.origin.1) / self.cell_size).floor() as i32,
        )
    }

    /// The world position of a cell's anchor.
    pub fn to_world(&self, cell: Point) -> (f32, f32) {
        (
            self.origin.0 + cell.x as f32 * self.cell_size,
            self.origin.1 + cell.y as f32 * self.cell_size,
        )
    }

    /// The world midpoint of a grid of the given dimensions, e.g. for
    /// centering a camera over a level.
    pub fn center(&self, size: Point) -> (f32, f32) {
        (
            self.origin.0 + (size.x as f32 * 0.5 - 0.5) * self.cell_size,
            self.origin.1 + (size.y as f32 * 0.5 - 0.5) * self.cell_size,
        )
    }
}
