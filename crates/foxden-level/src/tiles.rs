use serde::{Deserialize, Serialize};

/// The kind of one level tile.
///
/// Integer codes match the level-file format; glyphs are the ASCII-picture
/// spelling used by [`Level::from_text`](crate::Level::from_text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Walkable,
    Impassable,
    FoxStart,
    PlayerStart,
    PlayerFinish,
}

impl TileKind {
    /// The level-file code of this kind.
    pub const fn code(self) -> i32 {
        match self {
            Self::Walkable => 0,
            Self::Impassable => 1,
            Self::FoxStart => 2,
            Self::PlayerStart => 3,
            Self::PlayerFinish => 4,
        }
    }

    /// Look up a kind by level-file code.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Walkable),
            1 => Some(Self::Impassable),
            2 => Some(Self::FoxStart),
            3 => Some(Self::PlayerStart),
            4 => Some(Self::PlayerFinish),
            _ => None,
        }
    }

    /// The ASCII-picture glyph of this kind.
    pub const fn glyph(self) -> char {
        match self {
            Self::Walkable => '.',
            Self::Impassable => '#',
            Self::FoxStart => 'F',
            Self::PlayerStart => 'P',
            Self::PlayerFinish => 'X',
        }
    }

    /// Look up a kind by ASCII-picture glyph.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Walkable),
            '#' => Some(Self::Impassable),
            'F' => Some(Self::FoxStart),
            'P' => Some(Self::PlayerStart),
            'X' => Some(Self::PlayerFinish),
            _ => None,
        }
    }

    /// Whether this tile may be entered during traversal. Start and finish
    /// markers are ordinary walkable floor.
    pub const fn passable(self) -> bool {
        !matches!(self, Self::Impassable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TileKind; 5] = [
        TileKind::Walkable,
        TileKind::Impassable,
        TileKind::FoxStart,
        TileKind::PlayerStart,
        TileKind::PlayerFinish,
    ];

    #[test]
    fn code_round_trip() {
        for kind in ALL {
            assert_eq!(TileKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TileKind::from_code(5), None);
        assert_eq!(TileKind::from_code(-1), None);
    }

    #[test]
    fn glyph_round_trip() {
        for kind in ALL {
            assert_eq!(TileKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(TileKind::from_glyph('?'), None);
    }

    #[test]
    fn only_walls_block() {
        for kind in ALL {
            assert_eq!(kind.passable(), kind != TileKind::Impassable);
        }
    }
}
