//! Caller-owned handles laid out next to the level grid.

use foxden_core::{Point, Range};

/// A grid of opaque per-cell tokens kept parallel to a [`Level`](crate::Level).
///
/// The world loader drops one handle per spawned cell (an entity id, a scene
/// node, anything); this type never inspects them. Its one job is
/// [`resolve_path`](Self::resolve_path): turning the coordinates the
/// pathfinder returns back into the caller's own objects.
#[derive(Debug, Clone)]
pub struct CellAnchors<T> {
    bounds: Range,
    cells: Vec<Option<T>>,
}

impl<T> CellAnchors<T> {
    /// Create an empty anchor grid of the given dimensions.
    pub fn new(size: Point) -> Self {
        let bounds = Range::new(0, 0, size.x.max(0), size.y.max(0));
        let mut cells = Vec::new();
        cells.resize_with(bounds.len(), || None);
        Self { bounds, cells }
    }

    /// Grid dimensions.
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// Place an anchor at `p`, returning the displaced one. Out-of-bounds
    /// positions are ignored and the anchor is dropped.
    pub fn set(&mut self, p: Point, anchor: T) -> Option<T> {
        let i = self.idx(p)?;
        self.cells[i].replace(anchor)
    }

    /// The anchor at `p`, if any.
    pub fn get(&self, p: Point) -> Option<&T> {
        self.cells[self.idx(p)?].as_ref()
    }

    /// Remove and return the anchor at `p`.
    pub fn take(&mut self, p: Point) -> Option<T> {
        let i = self.idx(p)?;
        self.cells[i].take()
    }

    /// Translate a path of cells into anchor references, in order.
    ///
    /// Returns `None` when any path cell has no anchor.
    pub fn resolve_path(&self, path: &[Point]) -> Option<Vec<&T>> {
        path.iter().map(|&p| self.get(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_take() {
        let mut anchors = CellAnchors::new(Point::new(3, 2));
        assert_eq!(anchors.size(), Point::new(3, 2));
        assert_eq!(anchors.set(Point::new(1, 1), "cube"), None);
        assert_eq!(anchors.get(Point::new(1, 1)), Some(&"cube"));
        assert_eq!(anchors.set(Point::new(1, 1), "newer"), Some("cube"));
        assert_eq!(anchors.take(Point::new(1, 1)), Some("newer"));
        assert_eq!(anchors.get(Point::new(1, 1)), None);
    }

    #[test]
    fn out_of_bounds_is_inert() {
        let mut anchors = CellAnchors::new(Point::new(2, 2));
        assert_eq!(anchors.set(Point::new(5, 0), 42), None);
        assert_eq!(anchors.get(Point::new(5, 0)), None);
        assert_eq!(anchors.take(Point::new(-1, 1)), None);
    }

    #[test]
    fn resolves_a_full_path() {
        let mut anchors = CellAnchors::new(Point::new(3, 1));
        for x in 0..3 {
            anchors.set(Point::new(x, 0), x * 10);
        }
        let path = [Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(anchors.resolve_path(&path), Some(vec![&10, &20]));
    }

    #[test]
    fn missing_anchor_fails_resolution() {
        let mut anchors = CellAnchors::new(Point::new(3, 1));
        anchors.set(Point::new(0, 0), "a");
        let path = [Point::new(0, 0), Point::new(1, 0)];
        assert_eq!(anchors.resolve_path(&path), None);
    }
}
