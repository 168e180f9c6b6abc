use foxden_core::Point;

use crate::distance::manhattan;
use crate::traits::TileMap;

/// Grid pathfinder for 4-directional movement with unit step cost.
///
/// A `GridPathfinder` is a small bundle of search options; all per-query
/// state is allocated inside [`find_path`](Self::find_path) and dropped when
/// it returns, so a single instance can serve any number of maps and
/// concurrent callers.
///
/// The search expands cells in order of `distance + manhattan(cell, goal)`
/// until every reachable cell has been visited, then reconstructs the route
/// by walking from the goal down the distance field. Manhattan distance
/// never overestimates the remaining cost under 4-adjacency, so returned
/// paths are minimum-length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPathfinder {
    include_start: bool,
    expansion_limit: Option<usize>,
}

impl GridPathfinder {
    /// Create a pathfinder with default options: the start cell is excluded
    /// from results and expansion is unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to prepend the start cell to non-empty results.
    pub fn include_start(mut self, include: bool) -> Self {
        self.include_start = include;
        self
    }

    /// Abort a search after `limit` cell expansions and report "no path".
    ///
    /// This is the caller-imposed budget for very large grids; a search cut
    /// short never returns a partial route.
    pub fn expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Find the shortest route from `start` to `goal` on `map`.
    ///
    /// The result runs from the cell after `start` through `goal` inclusive.
    /// An empty vec means no route: the goal is unreachable, an endpoint is
    /// out of bounds or impassable, `start == goal`, or the expansion budget
    /// ran out. None of these are errors; callers that need to react (e.g.
    /// fall back to wandering) branch on emptiness.
    ///
    /// A zero-area map is a programmer error and trips a debug assertion.
    pub fn find_path<M: TileMap>(&self, map: &M, start: Point, goal: Point) -> Vec<Point> {
        let size = map.size();
        debug_assert!(size.x > 0 && size.y > 0, "tile map has zero area");
        if size.x <= 0 || size.y <= 0 {
            return Vec::new();
        }

        let mut search = Search::new(map);
        let (Some(si), Some(gi)) = (search.idx(start), search.idx(goal)) else {
            return Vec::new();
        };
        if !search.unvisited[si] || !search.unvisited[gi] {
            return Vec::new();
        }
        if si == gi {
            // Already there; nothing to traverse.
            return if self.include_start { vec![start] } else { Vec::new() };
        }

        if !search.run(si, goal, self.expansion_limit) {
            return Vec::new();
        }

        let mut path = search.trace_back(start, goal);
        if self.include_start && !path.is_empty() {
            path.insert(0, start);
        }
        path
    }
}

/// Find a shortest route with default options. See
/// [`GridPathfinder::find_path`].
pub fn find_path<M: TileMap>(map: &M, start: Point, goal: Point) -> Vec<Point> {
    GridPathfinder::new().find_path(map, start, goal)
}

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

/// Scratch state for one `find_path` call.
///
/// Everything is freshly allocated per query; nothing leaks across calls.
struct Search {
    size: Point,
    width: usize,
    /// Tentative distance from the start; infinity until first relaxed.
    distance: Vec<f64>,
    /// Passable cells not yet expanded. Shrinks monotonically; a cell
    /// leaves exactly once, when it becomes the current cell.
    unvisited: Vec<bool>,
    /// Cells discovered as neighbors of expanded cells, in discovery order.
    /// Membership implies `unvisited`.
    frontier: Vec<usize>,
    in_frontier: Vec<bool>,
}

impl Search {
    fn new<M: TileMap>(map: &M) -> Self {
        let size = map.size();
        let width = size.x as usize;
        let len = width * size.y as usize;
        let mut unvisited = vec![false; len];
        for y in 0..size.y {
            for x in 0..size.x {
                if map.passable(Point::new(x, y)) {
                    unvisited[y as usize * width + x as usize] = true;
                }
            }
        }
        Self {
            size,
            width,
            distance: vec![f64::INFINITY; len],
            unvisited,
            frontier: Vec::new(),
            in_frontier: vec![false; len],
        }
    }

    /// Flat index of `p`, or `None` when out of bounds.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.x || p.y >= self.size.y {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Expand cells until the frontier runs dry, relaxing each expanded
    /// cell's unvisited neighbors to `distance + 1`.
    ///
    /// The next cell to expand is the frontier member minimizing
    /// `distance + manhattan(cell, goal)`; on ties the earliest-discovered
    /// cell wins, which together with the fixed neighbor order makes the
    /// whole search deterministic.
    ///
    /// Returns `false` when `limit` expansions were spent before the
    /// frontier emptied.
    fn run(&mut self, start: usize, goal: Point, limit: Option<usize>) -> bool {
        self.distance[start] = 0.0;
        let mut current = start;
        let mut expanded: usize = 0;
        loop {
            expanded += 1;
            if limit.is_some_and(|l| expanded > l) {
                return false;
            }

            self.unvisited[current] = false;
            let relaxed = self.distance[current] + 1.0;
            for np in self.point(current).neighbors_4() {
                let Some(ni) = self.idx(np) else { continue };
                if !self.unvisited[ni] {
                    // Impassable, or already expanded.
                    continue;
                }
                if relaxed < self.distance[ni] {
                    self.distance[ni] = relaxed;
                }
                if !self.in_frontier[ni] {
                    self.in_frontier[ni] = true;
                    self.frontier.push(ni);
                }
            }

            let mut best: Option<(usize, f64)> = None;
            for (pos, &fi) in self.frontier.iter().enumerate() {
                let key = self.distance[fi] + f64::from(manhattan(self.point(fi), goal));
                if best.is_none_or(|(_, bk)| key < bk) {
                    best = Some((pos, key));
                }
            }
            let Some((pos, _)) = best else {
                // Every reachable cell has been expanded.
                return true;
            };
            current = self.frontier.remove(pos);
            self.in_frontier[current] = false;
        }
    }

    /// Reconstruct the route by walking from `goal` to the neighbor with the
    /// strictly lowest distance until `start` is reached, then reversing.
    ///
    /// Returns an empty vec when the goal was never reached or the walk gets
    /// stuck (no neighbor closer to the start).
    fn trace_back(&self, start: Point, goal: Point) -> Vec<Point> {
        let Some(gi) = self.idx(goal) else {
            return Vec::new();
        };
        if self.distance[gi].is_infinite() {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = goal;
        let mut current_dist = self.distance[gi];
        while current != start {
            path.push(current);
            let mut best: Option<(Point, f64)> = None;
            for np in current.neighbors_4() {
                let Some(ni) = self.idx(np) else { continue };
                let d = self.distance[ni];
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((np, d));
                }
            }
            match best {
                Some((np, d)) if d < current_dist => {
                    current = np;
                    current_dist = d;
                }
                _ => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}
