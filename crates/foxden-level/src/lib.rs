//! **foxden-level** — the world-side collaborator of the pathfinding engine.
//!
//! A [`Level`] is an immutable rectangular grid of [`TileKind`] cells, built
//! once by a loader (from a JSON [`LevelFile`] or an ASCII picture) and then
//! only read. It implements [`foxden_paths::TileMap`], so it can be handed
//! straight to the pathfinder. [`WorldFrame`] translates between continuous
//! world positions and grid cells, and [`CellAnchors`] keeps caller-owned
//! handles (entities, widgets, whatever) alongside the grid without the
//! level code ever looking inside them.

pub mod anchors;
pub mod frame;
pub mod layout;
pub mod level;
pub mod tiles;

pub use anchors::CellAnchors;
pub use frame::WorldFrame;
pub use layout::LevelFile;
pub use level::{LayoutError, Level};
pub use tiles::TileKind;
