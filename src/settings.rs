//! Player settings persisted to `settings.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::Direction;

pub const SETTINGS_FILE: &str = "settings.json";

pub const SPEED_RANGE: (u32, u32) = (1, 60);
pub const SIZE_RANGE: (i32, i32) = (10, 40);
pub const SCORE_INCREMENT_RANGE: (u32, u32) = (1, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game ticks per second.
    pub speed: u32,
    /// Pixel size of one grid cell.
    pub size: i32,
    /// Heading the snake starts with.
    pub direction: Direction,
    /// Points for food eaten the moment it appears.
    pub score_increment: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: 10,
            size: 20,
            direction: Direction::Right,
            score_increment: 10,
        }
    }
}

impl Settings {
    pub fn tick_period(&self) -> f32 {
        1.0 / self.speed.max(1) as f32
    }

    pub fn sanitized(self) -> Self {
        Self {
            speed: self.speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1),
            size: self.size.clamp(SIZE_RANGE.0, SIZE_RANGE.1),
            direction: self.direction,
            score_increment: self
                .score_increment
                .clamp(SCORE_INCREMENT_RANGE.0, SCORE_INCREMENT_RANGE.1),
        }
    }

    /// Reads settings from `path`. A missing file is created with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let defaults = Settings::default();
            defaults.save(path)?;
            tracing::info!(path = %path.display(), "wrote default settings");
            return Ok(defaults);
        }
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let settings: Settings = serde_json::from_str(&text).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(settings.sanitized())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let text = serde_json::to_string_pretty(self).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(|e| Error::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);

        let loaded = Settings::load(&path).expect("load defaults");
        assert_eq!(loaded, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings {
            speed: 15,
            size: 25,
            direction: Direction::Down,
            score_increment: 20,
        };

        settings.save(&path).expect("save");
        assert_eq!(Settings::load(&path).expect("load"), settings);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"speed": 0, "size": 500, "score_increment": 0}"#).expect("write");

        let loaded = Settings::load(&path).expect("load");
        assert_eq!(loaded.speed, 1);
        assert_eq!(loaded.size, 40);
        assert_eq!(loaded.score_increment, 1);
        assert_eq!(loaded.direction, Direction::Right);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "speed = fast").expect("write");

        assert!(matches!(Settings::load(&path), Err(Error::Settings { .. })));
    }

    #[test]
    fn tick_period_follows_speed() {
        let settings = Settings::default();
        assert!((settings.tick_period() - 0.1).abs() < 1e-6);
    }
}
