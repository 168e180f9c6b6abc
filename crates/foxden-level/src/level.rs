//! The immutable level grid.

use std::fmt;

use foxden_core::{Point, Range};
use foxden_paths::TileMap;

use crate::tiles::TileKind;

/// A rectangular grid of tiles, built once by a loader and then only read.
///
/// Cells are stored row-major; (0, 0) is the first cell of the first row.
/// During play the level is handed to the pathfinder by reference — it is
/// never mutated, so shared access across searches is safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    size: Point,
    tiles: Vec<TileKind>,
}

impl Level {
    /// Build a level from rows of level-file codes. Row `y`, column `x`
    /// becomes the tile at (x, y).
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, LayoutError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let kind = TileKind::from_code(code).ok_or(LayoutError::UnknownCode {
                    code,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(kind);
            }
        }
        Ok(Self {
            size: Point::new(width as i32, height as i32),
            tiles,
        })
    }

    /// Build a level from an ASCII picture, one glyph per tile
    /// (see [`TileKind::from_glyph`]). Lines must all have the same width.
    pub fn from_text(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let height = s.lines().count();
        let width = s.lines().next().map_or(0, |l| l.chars().count());
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (y, line) in s.lines().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in line.chars().enumerate() {
                let kind = TileKind::from_glyph(glyph).ok_or(LayoutError::UnknownGlyph {
                    glyph,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(kind);
            }
        }
        Ok(Self {
            size: Point::new(width as i32, height as i32),
            tiles,
        })
    }

    /// Grid dimensions: `x` is the width, `y` the height.
    pub fn size(&self) -> Point {
        self.size
    }

    /// The grid rectangle, anchored at the origin.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }

    /// The tile at `p`, or `None` when out of bounds.
    pub fn at(&self, p: Point) -> Option<TileKind> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(self.tiles[p.y as usize * self.size.x as usize + p.x as usize])
    }

    /// All cells of the given kind, in row-major order.
    pub fn tiles_of(&self, kind: TileKind) -> impl Iterator<Item = Point> + '_ {
        let width = self.size.x;
        self.tiles
            .iter()
            .enumerate()
            .filter(move |&(_, &t)| t == kind)
            .map(move |(i, _)| Point::new(i as i32 % width, i as i32 / width))
    }

    /// Fox spawn cells.
    pub fn fox_starts(&self) -> Vec<Point> {
        self.tiles_of(TileKind::FoxStart).collect()
    }

    /// The player spawn cell, if the layout marks one.
    pub fn player_start(&self) -> Option<Point> {
        self.tiles_of(TileKind::PlayerStart).next()
    }

    /// The player goal cell, if the layout marks one.
    pub fn player_finish(&self) -> Option<Point> {
        self.tiles_of(TileKind::PlayerFinish).next()
    }

    /// The level as rows of level-file codes (the inverse of
    /// [`from_rows`](Self::from_rows)).
    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.tiles
            .chunks(self.size.x as usize)
            .map(|row| row.iter().map(|t| t.code()).collect())
            .collect()
    }
}

impl TileMap for Level {
    fn size(&self) -> Point {
        self.size
    }

    fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(TileKind::passable)
    }
}

/// Errors that can occur when building a level from a layout.
#[derive(Debug)]
pub enum LayoutError {
    /// The layout has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A level-file code that maps to no tile kind.
    UnknownCode { code: i32, pos: Point },
    /// A picture glyph that maps to no tile kind.
    UnknownGlyph { glyph: char, pos: Point },
    /// The level file is not valid JSON.
    Json(serde_json::Error),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} has width {found}, expected {expected}"
            ),
            Self::UnknownCode { code, pos } => {
                write!(f, "unknown tile code {code} at {pos}")
            }
            Self::UnknownGlyph { glyph, pos } => {
                write!(f, "unknown tile glyph \u{201c}{glyph}\u{201d} at {pos}")
            }
            Self::Json(err) => write!(f, "level file is not valid JSON: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foxden_paths::find_path;

    const DEN: &str = "\
P....
.###.
.#F#.
.#.#.
....X";

    #[test]
    fn text_layout_queries() {
        let level = Level::from_text(DEN).unwrap();
        assert_eq!(level.size(), Point::new(5, 5));
        assert_eq!(level.at(Point::new(0, 0)), Some(TileKind::PlayerStart));
        assert_eq!(level.at(Point::new(1, 1)), Some(TileKind::Impassable));
        assert_eq!(level.at(Point::new(5, 0)), None);
        assert_eq!(level.player_start(), Some(Point::new(0, 0)));
        assert_eq!(level.player_finish(), Some(Point::new(4, 4)));
        assert_eq!(level.fox_starts(), vec![Point::new(2, 2)]);
    }

    #[test]
    fn rows_round_trip() {
        let level = Level::from_text(DEN).unwrap();
        let back = Level::from_rows(&level.rows()).unwrap();
        assert_eq!(level, back);
    }

    #[test]
    fn from_rows_codes() {
        let level = Level::from_rows(&[vec![0, 1], vec![3, 4]]).unwrap();
        assert_eq!(level.at(Point::new(1, 0)), Some(TileKind::Impassable));
        assert_eq!(level.at(Point::new(0, 1)), Some(TileKind::PlayerStart));
    }

    #[test]
    fn layout_errors() {
        assert!(matches!(Level::from_text(""), Err(LayoutError::Empty)));
        assert!(matches!(Level::from_rows(&[]), Err(LayoutError::Empty)));
        assert!(matches!(
            Level::from_text("..\n..."),
            Err(LayoutError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Level::from_rows(&[vec![0, 0], vec![0]]),
            Err(LayoutError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Level::from_text("..\n.q"),
            Err(LayoutError::UnknownGlyph { glyph: 'q', .. })
        ));
        assert!(matches!(
            Level::from_rows(&[vec![0, 9]]),
            Err(LayoutError::UnknownCode { code: 9, .. })
        ));
    }

    #[test]
    fn pathfinder_runs_on_a_level() {
        // The fox sits in a walled pocket with one opening at (3, 3).
        let level = Level::from_text(
            "\
P....
.###.
.#F#.
.#..X
.....",
        )
        .unwrap();
        let fox = level.fox_starts()[0];
        let player = level.player_start().unwrap();
        let path = find_path(&level, fox, player);
        assert!(!path.is_empty());
        assert_eq!(*path.last().unwrap(), player);
        for p in &path {
            assert_ne!(level.at(*p), Some(TileKind::Impassable));
        }
    }

    #[test]
    fn walls_are_impassable_to_the_map_trait() {
        let level = Level::from_text(DEN).unwrap();
        assert!(TileMap::passable(&level, Point::new(0, 4)));
        assert!(!TileMap::passable(&level, Point::new(1, 1)));
        assert!(!TileMap::passable(&level, Point::new(-1, 0)));
    }
}
