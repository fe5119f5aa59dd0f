//! Screen routing, modal dialogs and the glue between the game and its files.
//!
//! Nothing in here touches the window: the frame loop feeds keys and frame
//! deltas in, then drains audio cues and draws whatever state is left.

use std::env;
use std::path::{Path, PathBuf};

use macroquad::input::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{AudioCue, sounds_dir};
use crate::dialog::{Dialog, DialogOutcome, DialogQueue, Prompt};
use crate::error::Error;
use crate::game::{GameEvent, SnakeGame};
use crate::grid::Grid;
use crate::highscores::{HIGH_SCORES_FILE, HighScores};
use crate::input::command_for_key;
use crate::menu::{EditorOutcome, MainMenu, MenuEntry, SettingsEditor};
use crate::settings::{SETTINGS_FILE, Settings};

/// Pixel size of the playfield the grid is carved from.
pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;

pub const DATA_DIR_ENV: &str = "ARCADE_HUB_DATA_DIR";

const GAME_TITLE: &str = "Snake Game";
const PRESS_ANY_KEY: &str = "Press any key to start the game!";

/// Where settings, scores and sounds live.
#[derive(Debug, Clone)]
pub struct Paths {
    data_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `$ARCADE_HUB_DATA_DIR`, falling back to the working directory.
    pub fn from_env() -> Self {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new("."),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn settings(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn high_scores(&self) -> PathBuf {
        self.data_dir.join(HIGH_SCORES_FILE)
    }

    pub fn sounds(&self) -> PathBuf {
        sounds_dir(&self.data_dir)
    }
}

pub enum Screen {
    Menu(MainMenu),
    Settings(SettingsEditor),
    Snake(SnakeGame),
}

pub struct App {
    paths: Paths,
    settings: Settings,
    high_scores: HighScores,
    screen: Screen,
    dialogs: DialogQueue,
    cues: Vec<AudioCue>,
    seed: Option<u64>,
    quit: bool,
}

impl App {
    /// Loads settings and scores. Failures become error dialogs and defaults.
    pub fn new(paths: Paths) -> Self {
        let mut dialogs = DialogQueue::new();

        let settings = Settings::load(&paths.settings()).unwrap_or_else(|e| {
            dialogs.push(Dialog::error(format!(
                "An error occurred while loading settings: {e}"
            )));
            Settings::default()
        });
        let high_scores = HighScores::load(paths.high_scores()).unwrap_or_else(|e| {
            dialogs.push(Dialog::error(format!(
                "An error occurred while loading high scores: {e}"
            )));
            HighScores::empty(paths.high_scores())
        });

        tracing::info!(
            data_dir = %paths.data_dir().display(),
            speed = settings.speed,
            size = settings.size,
            "arcade hub ready"
        );

        Self {
            paths,
            settings,
            high_scores,
            screen: Screen::Menu(MainMenu::default()),
            dialogs,
            cues: Vec::new(),
            seed: None,
            quit: false,
        }
    }

    /// Makes every new game use the same random sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn dialogs(&self) -> &DialogQueue {
        &self.dialogs
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn snake_game_mut(&mut self) -> Option<&mut SnakeGame> {
        match &mut self.screen {
            Screen::Snake(game) => Some(game),
            _ => None,
        }
    }

    /// Shows `error` in a modal dialog.
    pub fn report(&mut self, context: &str, error: Error) {
        self.dialogs
            .push(Dialog::error(format!("An error occurred {context}: {error}")));
    }

    /// Audio cues emitted since the last call.
    pub fn take_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if self.dialogs.is_open() {
            if let DialogOutcome::Answered {
                prompt: Prompt::PlayAgain,
                yes,
            } = self.dialogs.handle_key(key)
            {
                self.answer_play_again(yes);
            }
            return;
        }

        match &mut self.screen {
            Screen::Menu(menu) => {
                if let Some(entry) = menu.handle_key(key) {
                    self.activate(entry);
                }
            }
            Screen::Settings(editor) => {
                if editor.handle_key(key) == EditorOutcome::Done {
                    let edited = editor.settings;
                    self.store_settings(edited);
                    self.screen = Screen::Menu(MainMenu::default());
                }
            }
            Screen::Snake(game) => {
                if key == KeyCode::Escape {
                    self.cues.push(AudioCue::StopMusic);
                    self.screen = Screen::Menu(MainMenu::default());
                    return;
                }
                let events = game.handle_command(command_for_key(key));
                self.apply_events(events);
            }
        }
    }

    /// Advances the active game. Open dialogs hold everything still.
    pub fn update(&mut self, dt: f32) {
        if self.dialogs.is_open() {
            return;
        }
        if let Screen::Snake(game) = &mut self.screen {
            let events = game.update(dt);
            self.apply_events(events);
        }
    }

    fn activate(&mut self, entry: MenuEntry) {
        tracing::debug!(entry = entry.label(), "menu entry chosen");
        match entry {
            MenuEntry::Snake => self.open_snake(),
            MenuEntry::Tetris | MenuEntry::Pong => {
                self.dialogs.push(Dialog::info(
                    "Arcade Hub",
                    format!("{} not implemented yet.", entry.label()),
                ));
            }
            MenuEntry::HighScores => {
                self.dialogs
                    .push(Dialog::info("High Scores", self.high_scores.summary()));
            }
            MenuEntry::Settings => {
                self.screen = Screen::Settings(SettingsEditor::new(self.settings));
            }
            MenuEntry::Quit => self.quit = true,
        }
    }

    fn open_snake(&mut self) {
        let grid = Grid::for_field(FIELD_WIDTH, FIELD_HEIGHT, self.settings.size);
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.screen = Screen::Snake(SnakeGame::new(self.settings, grid, rng));
        self.dialogs.push(Dialog::info(GAME_TITLE, PRESS_ANY_KEY));
    }

    fn store_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if let Err(e) = settings.save(&self.paths.settings()) {
            self.report("while saving settings", e);
        } else {
            tracing::info!(speed = settings.speed, size = settings.size, "settings saved");
        }
    }

    fn answer_play_again(&mut self, yes: bool) {
        if !yes {
            self.screen = Screen::Menu(MainMenu::default());
            return;
        }
        if let Screen::Snake(game) = &mut self.screen {
            game.restart();
            self.dialogs.push(Dialog::info(GAME_TITLE, PRESS_ANY_KEY));
        }
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            tracing::debug!(?event, "game event");
            match event {
                GameEvent::Started | GameEvent::Resumed => self.cues.push(AudioCue::StartMusic),
                GameEvent::Paused => self.cues.push(AudioCue::StopMusic),
                GameEvent::Restarted => {
                    self.cues.push(AudioCue::StopMusic);
                    self.dialogs.push(Dialog::info(GAME_TITLE, PRESS_ANY_KEY));
                }
                GameEvent::Ate { .. } => self.cues.push(AudioCue::Eat),
                GameEvent::GameOver { score } => self.game_over(score),
                GameEvent::FoodExpired
                | GameEvent::FoodSpawned
                | GameEvent::WallSpawned
                | GameEvent::WallSolidified => {}
            }
        }
    }

    fn game_over(&mut self, score: u32) {
        tracing::info!(score, "game over");
        self.cues.push(AudioCue::StopMusic);
        self.cues.push(AudioCue::GameOver);
        if let Err(e) = self.high_scores.add(score) {
            self.report("while saving high scores", e);
        }
        self.dialogs.push(Dialog::info(
            GAME_TITLE,
            format!("Game Over! Your score: {score}"),
        ));
        self.dialogs
            .push(Dialog::info("High Scores", self.high_scores.summary()));
        self.dialogs.push(Dialog::question(
            GAME_TITLE,
            "Do you want to play again?",
            Prompt::PlayAgain,
        ));
    }
}
