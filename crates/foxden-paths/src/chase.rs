//! Turn-based pursuit on top of the pathfinder.
//!
//! A [`Chaser`] remembers the last target cell and the queued route, and only
//! re-runs the search when the target actually moves: one search per target
//! change, not per turn. When no route exists the agent is expected to fall
//! back to [`wander_step`].

use std::collections::VecDeque;

use foxden_core::Point;
use rand::Rng;
use rand::RngExt;

use crate::search::GridPathfinder;
use crate::traits::TileMap;

/// Pursuit state for one agent: the current target and the route queued
/// toward it.
#[derive(Debug, Clone, Default)]
pub struct Chaser {
    finder: GridPathfinder,
    target: Option<Point>,
    path: VecDeque<Point>,
}

impl Chaser {
    /// Create a chaser using default pathfinder options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chaser using the given pathfinder options.
    pub fn with_finder(finder: GridPathfinder) -> Self {
        Self {
            finder,
            target: None,
            path: VecDeque::new(),
        }
    }

    /// Point the chaser at `target`, standing at `from`.
    ///
    /// The search is re-run only when the target cell differs from the
    /// previous one; an unchanged target keeps consuming the queued route.
    /// Retargeting the agent's own cell counts as arrival and drops the
    /// queue. Returns whether a route is queued after the call.
    pub fn retarget<M: TileMap>(&mut self, map: &M, from: Point, target: Point) -> bool {
        let unchanged = self.target == Some(target);
        self.target = Some(target);
        if target == from {
            self.path.clear();
        } else if !unchanged {
            self.path = self.finder.find_path(map, from, target).into();
            log::debug!(
                "chase: repath {from} -> {target}, {} step(s)",
                self.path.len()
            );
        }
        !self.path.is_empty()
    }

    /// Pop the next cell to move to, if any.
    ///
    /// The chaser assumes the caller actually makes the move; it does not
    /// re-validate consumed steps.
    pub fn next_step(&mut self) -> Option<Point> {
        self.path.pop_front()
    }

    /// The cell currently being pursued.
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Number of queued steps remaining.
    pub fn remaining(&self) -> usize {
        self.path.len()
    }

    /// Forget the target and queued route (e.g. on level restart).
    pub fn clear(&mut self) {
        self.target = None;
        self.path.clear();
    }
}

/// Pick a uniformly random passable cardinal neighbor of `from`, or `None`
/// when boxed in.
///
/// The fallback move for an agent whose chase produced no route.
pub fn wander_step<M: TileMap, R: Rng>(map: &M, from: Point, rng: &mut R) -> Option<Point> {
    let open: Vec<Point> = from
        .neighbors_4()
        .into_iter()
        .filter(|&n| map.passable(n))
        .collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}
