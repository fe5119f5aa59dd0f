//! Arcade launcher with a Snake game: a grid snake that wraps at the edges,
//! food that loses value as it ages, and walls that flash before they turn solid.

pub mod app;
pub mod audio;
pub mod dialog;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod highscores;
pub mod input;
pub mod logging;
pub mod menu;
pub mod render;
pub mod settings;
pub mod snake;
pub mod timer;
pub mod wall;

pub use error::{Error, Result};
