//! Pathfinding engine for grid-based chase games.
//!
//! The central operation is [`GridPathfinder::find_path`]: given a tile map,
//! a start cell, and a goal cell, it returns the shortest route under
//! 4-directional movement with unit step cost, as an ordered list of cells
//! from the cell *after* the start through the goal. "No route" is signaled
//! by an empty list, never by an error.
//!
//! The engine only sees maps through the [`TileMap`] trait (grid size plus
//! per-cell passability), so any world representation can be searched. The
//! [`chase`] module layers the turn-based pursuit policy on top: cache the
//! path, re-search only when the target cell moves, wander when boxed in.
//!
//! All search state lives on the call stack of a single `find_path` call;
//! concurrent searches over a shared map are safe as long as the map itself
//! is not mutated underneath them.

mod chase;
mod distance;
mod search;
mod traits;

pub use chase::{Chaser, wander_step};
pub use distance::manhattan;
pub use search::{GridPathfinder, find_path};
pub use traits::{FnMap, TileMap};
