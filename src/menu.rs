//! Launcher menu and the settings editor reachable from it.

use macroquad::input::KeyCode;

use crate::input::{horizontal_step, is_confirm, vertical_step};
use crate::settings::{SCORE_INCREMENT_RANGE, SIZE_RANGE, SPEED_RANGE, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Snake,
    Tetris,
    Pong,
    HighScores,
    Settings,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 6] = [
        MenuEntry::Snake,
        MenuEntry::Tetris,
        MenuEntry::Pong,
        MenuEntry::HighScores,
        MenuEntry::Settings,
        MenuEntry::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Snake => "Snake",
            MenuEntry::Tetris => "Tetris",
            MenuEntry::Pong => "Pong",
            MenuEntry::HighScores => "High Scores",
            MenuEntry::Settings => "Settings",
            MenuEntry::Quit => "Quit",
        }
    }
}

fn wrap_index(current: usize, step: i32, len: usize) -> usize {
    (current as i32 + step).rem_euclid(len as i32) as usize
}

#[derive(Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected]
    }

    /// Moves the cursor or returns the entry activated by `key`.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<MenuEntry> {
        if let Some(step) = vertical_step(key) {
            self.selected = wrap_index(self.selected, step, MenuEntry::ALL.len());
            return None;
        }
        if is_confirm(key) {
            return Some(self.selected());
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Speed,
    Size,
    ScoreIncrement,
    Direction,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Speed,
        SettingsRow::Size,
        SettingsRow::ScoreIncrement,
        SettingsRow::Direction,
    ];
}

/// Editable copy of the settings. Nothing is persisted until the screen is left.
#[derive(Debug)]
pub struct SettingsEditor {
    pub settings: Settings,
    selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Editing,
    Done,
}

impl SettingsEditor {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            selected: 0,
        }
    }

    pub fn selected(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected]
    }

    pub fn rows(&self) -> Vec<(SettingsRow, String)> {
        SettingsRow::ALL
            .iter()
            .map(|row| {
                let text = match row {
                    SettingsRow::Speed => format!("Speed: {} ticks/s", self.settings.speed),
                    SettingsRow::Size => format!("Cell size: {} px", self.settings.size),
                    SettingsRow::ScoreIncrement => {
                        format!("Score per food: {}", self.settings.score_increment)
                    }
                    SettingsRow::Direction => {
                        format!("Start heading: {}", self.settings.direction.label())
                    }
                };
                (*row, text)
            })
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyCode) -> EditorOutcome {
        if is_confirm(key) || key == KeyCode::Escape {
            return EditorOutcome::Done;
        }
        if let Some(step) = vertical_step(key) {
            self.selected = wrap_index(self.selected, step, SettingsRow::ALL.len());
        } else if let Some(step) = horizontal_step(key) {
            self.adjust(step);
        }
        EditorOutcome::Editing
    }

    fn adjust(&mut self, step: i32) {
        let row = self.selected();
        let s = &mut self.settings;
        match row {
            SettingsRow::Speed => {
                s.speed = (s.speed as i32 + step)
                    .clamp(SPEED_RANGE.0 as i32, SPEED_RANGE.1 as i32) as u32;
            }
            SettingsRow::Size => {
                s.size = (s.size + step * 5).clamp(SIZE_RANGE.0, SIZE_RANGE.1);
            }
            SettingsRow::ScoreIncrement => {
                s.score_increment = (s.score_increment as i32 + step * 5)
                    .clamp(SCORE_INCREMENT_RANGE.0 as i32, SCORE_INCREMENT_RANGE.1 as i32)
                    as u32;
            }
            SettingsRow::Direction => {
                s.direction = if step > 0 {
                    s.direction.clockwise()
                } else {
                    s.direction.counter_clockwise()
                };
            }
        }
    }
}
