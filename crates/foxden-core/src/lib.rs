//! **foxden-core** — shared geometry types for the foxden crates.
//!
//! Provides the integer [`Point`] and half-open rectangle [`Range`] used by
//! the pathfinding engine and the level model.

pub mod geom;

pub use geom::{Point, Range};
