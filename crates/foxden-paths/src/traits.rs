use foxden_core::{Point, Range};

/// Read-only view of a rectangular tile map, the search universe of the
/// pathfinding engine.
///
/// The engine never holds on to a map between calls; it receives one by
/// reference per query and only reads it.
pub trait TileMap {
    /// Grid dimensions as a point: `x` is the width, `y` the height.
    fn size(&self) -> Point;

    /// Whether the cell at `p` can be entered during traversal.
    ///
    /// Must return `false` for out-of-bounds coordinates.
    fn passable(&self, p: Point) -> bool;
}

/// Adapter exposing a `(width, height, predicate)` triple as a [`TileMap`].
///
/// Useful for callers that have no full level object, e.g. tests or ad-hoc
/// occupancy masks layered over another map.
pub struct FnMap<F> {
    bounds: Range,
    passable: F,
}

impl<F: Fn(Point) -> bool> FnMap<F> {
    /// Create a map of the given dimensions backed by a passability closure.
    ///
    /// The closure is only consulted for in-bounds coordinates.
    pub fn new(width: i32, height: i32, passable: F) -> Self {
        Self {
            bounds: Range::new(0, 0, width.max(0), height.max(0)),
            passable,
        }
    }
}

impl<F: Fn(Point) -> bool> TileMap for FnMap<F> {
    fn size(&self) -> Point {
        self.bounds.size()
    }

    fn passable(&self, p: Point) -> bool {
        self.bounds.contains(p) && (self.passable)(p)
    }
}
