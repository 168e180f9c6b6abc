//! JSON level files.
//!
//! Levels are authored in an editor and saved as a small JSON document: a
//! display name plus rows of tile codes. This module is the load/save pair;
//! [`Level`] is the runtime form.

use serde::{Deserialize, Serialize};

use crate::level::{LayoutError, Level};

/// A level as it sits on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    pub name: String,
    pub rows: Vec<Vec<i32>>,
}

impl LevelFile {
    /// Parse a level file from JSON.
    pub fn from_json(s: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize the level file to JSON.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build the runtime [`Level`] from the stored rows.
    pub fn level(&self) -> Result<Level, LayoutError> {
        let level = Level::from_rows(&self.rows)?;
        let size = level.size();
        log::debug!("layout: built level {:?}, {}x{}", self.name, size.x, size.y);
        Ok(level)
    }

    /// Capture a level back into file form, e.g. from an editor.
    pub fn from_level(name: impl Into<String>, level: &Level) -> Self {
        Self {
            name: name.into(),
            rows: level.rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TileKind;
    use foxden_core::Point;

    #[test]
    fn json_round_trip() {
        let file = LevelFile {
            name: "den one".to_string(),
            rows: vec![vec![3, 0, 0], vec![0, 1, 0], vec![0, 0, 2]],
        };
        let json = file.to_json().unwrap();
        let back = LevelFile::from_json(&json).unwrap();
        assert_eq!(file, back);
    }

    #[test]
    fn builds_the_runtime_level() {
        let file = LevelFile {
            name: "tiny".to_string(),
            rows: vec![vec![0, 1], vec![2, 4]],
        };
        let level = file.level().unwrap();
        assert_eq!(level.size(), Point::new(2, 2));
        assert_eq!(level.at(Point::new(0, 1)), Some(TileKind::FoxStart));
    }

    #[test]
    fn level_capture_round_trips() {
        let level = Level::from_text("P.#\n..X").unwrap();
        let file = LevelFile::from_level("capture", &level);
        assert_eq!(file.rows, vec![vec![3, 0, 1], vec![0, 0, 4]]);
        assert_eq!(file.level().unwrap(), level);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = LevelFile::from_json("{\"name\": \"x\"").unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
        // Valid JSON, invalid codes: the layout check still runs.
        let file = LevelFile::from_json("{\"name\": \"x\", \"rows\": [[7]]}").unwrap();
        assert!(matches!(
            file.level(),
            Err(LayoutError::UnknownCode { code: 7, .. })
        ));
    }
}
