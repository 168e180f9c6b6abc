use foxden_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the selection heuristic of the engine: exact for unobstructed
/// 4-directional movement, never an overestimate otherwise.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(2, 3), Point::new(2, 3)), 0);
        assert_eq!(manhattan(Point::new(-2, 1), Point::new(1, -3)), 7);
        // Symmetric.
        assert_eq!(
            manhattan(Point::new(5, 0), Point::new(0, 2)),
            manhattan(Point::new(0, 2), Point::new(5, 0))
        );
    }
}
