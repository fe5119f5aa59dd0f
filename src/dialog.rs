//! Modal message boxes. While a dialog is open it swallows every key press.

use std::collections::VecDeque;

use macroquad::input::KeyCode;

use crate::input::{horizontal_step, is_confirm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
    Question { prompt: Prompt, yes_selected: bool },
}

/// Identifies which yes/no question an answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    PlayAgain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            kind: DialogKind::Error,
        }
    }

    pub fn question(title: impl Into<String>, message: impl Into<String>, prompt: Prompt) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Question {
                prompt,
                yes_selected: true,
            },
        }
    }
}

/// Outcome of a key press on the open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still open.
    Pending,
    Dismissed,
    Answered { prompt: Prompt, yes: bool },
}

#[derive(Debug, Default)]
pub struct DialogQueue {
    pending: VecDeque<Dialog>,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dialog: Dialog) {
        if dialog.kind == DialogKind::Error {
            tracing::error!(message = %dialog.message, "error dialog");
        }
        self.pending.push_back(dialog);
    }

    pub fn current(&self) -> Option<&Dialog> {
        self.pending.front()
    }

    pub fn is_open(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn handle_key(&mut self, key: KeyCode) -> DialogOutcome {
        let Some(dialog) = self.pending.front_mut() else {
            return DialogOutcome::Pending;
        };

        let outcome = match &mut dialog.kind {
            DialogKind::Info | DialogKind::Error => {
                if is_confirm(key) || key == KeyCode::Escape {
                    DialogOutcome::Dismissed
                } else {
                    DialogOutcome::Pending
                }
            }
            DialogKind::Question {
                prompt,
                yes_selected,
            } => match key {
                KeyCode::Y => DialogOutcome::Answered {
                    prompt: *prompt,
                    yes: true,
                },
                KeyCode::N | KeyCode::Escape => DialogOutcome::Answered {
                    prompt: *prompt,
                    yes: false,
                },
                k if is_confirm(k) => DialogOutcome::Answered {
                    prompt: *prompt,
                    yes: *yes_selected,
                },
                k => {
                    if horizontal_step(k).is_some() {
                        *yes_selected = !*yes_selected;
                    }
                    DialogOutcome::Pending
                }
            },
        };

        if outcome != DialogOutcome::Pending {
            self.pending.pop_front();
        }
        outcome
    }
}
