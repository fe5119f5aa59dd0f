use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const HIGH_SCORES_FILE: &str = "highscores.txt";
pub const MAX_HIGH_SCORES: usize = 10;

/// Best scores, highest first, backed by a newline-separated text file.
#[derive(Debug, Clone)]
pub struct HighScores {
    path: PathBuf,
    scores: Vec<i64>,
}

impl HighScores {
    /// An empty table that will be written to `path` on the first `add`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scores: Vec::new(),
        }
    }

    /// Reads the table. Lines that are not integers count as 0; hand-edited
    /// negative entries are kept and rank last.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::empty(path));
        }
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let scores = text
            .lines()
            .map(|line| line.trim().parse::<i64>().unwrap_or(0))
            .collect();
        let mut table = Self { path, scores };
        table.rank();
        Ok(table)
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Records a score and rewrites the file.
    pub fn add(&mut self, score: u32) -> Result<()> {
        self.scores.push(i64::from(score));
        self.rank();
        self.save()
    }

    fn rank(&mut self) {
        self.scores.sort_unstable_by(|a, b| b.cmp(a));
        self.scores.truncate(MAX_HIGH_SCORES);
    }

    fn save(&self) -> Result<()> {
        let mut text = String::new();
        for score in &self.scores {
            text.push_str(&score.to_string());
            text.push('\n');
        }
        fs::write(&self.path, text).map_err(|e| Error::io(&self.path, e))?;
        tracing::info!(
            path = %self.path.display(),
            entries = self.scores.len(),
            "saved high scores"
        );
        Ok(())
    }

    /// The table as shown in the high score dialog.
    pub fn summary(&self) -> String {
        let mut message = String::from("High Scores:\n");
        for (i, score) in self.scores.iter().enumerate() {
            message.push_str(&format!("{}. {}\n", i + 1, score));
        }
        message
    }
}
