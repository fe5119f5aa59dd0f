use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file {} is malformed: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{name} sound file not found at {}", .path.display())]
    MissingSound { name: &'static str, path: PathBuf },

    #[error("Could not load {name} sound: {reason}")]
    Sound { name: &'static str, reason: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_file() {
        let err = Error::io(
            "highscores.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("highscores.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn missing_sound_message_names_the_sound() {
        let err = Error::MissingSound {
            name: "Background",
            path: PathBuf::from("resources/sounds/background.wav"),
        };
        assert!(err.to_string().starts_with("Background sound file not found"));
    }
}
