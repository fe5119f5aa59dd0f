use std::path::{Path, PathBuf};

use macroquad::audio::{
    PlaySoundParams, Sound, load_sound, load_sound_from_bytes, play_sound, stop_sound,
};

use crate::error::{Error, Result};

/// Something the game wants to hear. Screens emit cues, the frame loop plays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    StartMusic,
    StopMusic,
    Eat,
    GameOver,
}

pub const BACKGROUND_FILE: &str = "background.wav";
pub const EAT_FILE: &str = "eat.wav";
pub const GAME_OVER_FILE: &str = "gameover.wav";

pub const TONE_SAMPLE_RATE: u32 = 22_050;
const WAV_HEADER_LEN: usize = 44;
const BYTES_PER_SAMPLE: u32 = 2;

fn wav_header(sample_rate: u32, data_len: u32) -> [u8; WAV_HEADER_LEN] {
    let mut header = [0u8; WAV_HEADER_LEN];
    let fields: [&[u8]; 12] = [
        b"RIFF",
        &(36 + data_len).to_le_bytes(),
        b"WAVEfmt ",
        &16u32.to_le_bytes(),
        &1u16.to_le_bytes(), // PCM
        &1u16.to_le_bytes(), // mono
        &sample_rate.to_le_bytes(),
        &(sample_rate * BYTES_PER_SAMPLE).to_le_bytes(),
        &(BYTES_PER_SAMPLE as u16).to_le_bytes(),
        &16u16.to_le_bytes(),
        b"data",
        &data_len.to_le_bytes(),
    ];
    let mut at = 0;
    for field in fields {
        header[at..at + field.len()].copy_from_slice(field);
        at += field.len();
    }
    header
}

/// A mono 16-bit WAV clip holding a sine tone, used when a sound file is missing.
pub fn sine_wav(sample_rate: u32, frequency_hz: f32, seconds: f32, volume: f32) -> Vec<u8> {
    let samples = (seconds.max(0.0) * sample_rate as f32) as u32;
    let peak = volume.clamp(0.0, 1.0) * f32::from(i16::MAX);
    let step = std::f32::consts::TAU * frequency_hz / sample_rate as f32;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + (samples * BYTES_PER_SAMPLE) as usize);
    wav.extend_from_slice(&wav_header(sample_rate, samples * BYTES_PER_SAMPLE));
    wav.extend((0..samples).flat_map(|n| {
        let sample = (peak * (step * n as f32).sin()) as i16;
        sample.to_le_bytes()
    }));
    wav
}

async fn load_clip(name: &'static str, path: &Path) -> Result<Sound> {
    if !path.exists() {
        return Err(Error::MissingSound {
            name,
            path: path.to_path_buf(),
        });
    }
    load_sound(&path.to_string_lossy())
        .await
        .map_err(|e| Error::Sound {
            name,
            reason: e.to_string(),
        })
}

async fn tone(frequency_hz: f32, duration_seconds: f32) -> Option<Sound> {
    let bytes = sine_wav(TONE_SAMPLE_RATE, frequency_hz, duration_seconds, 0.4);
    match load_sound_from_bytes(&bytes).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            tracing::warn!(error = %e, "could not build fallback tone");
            None
        }
    }
}

/// Background loop plus one-shot effects. Playback is fire-and-forget.
pub struct SoundBank {
    background: Option<Sound>,
    eat: Option<Sound>,
    game_over: Option<Sound>,
    music_playing: bool,
}

impl SoundBank {
    /// Loads the clips under `dir`. Clips that fail are replaced by generated
    /// tones (the background stays silent) and reported in the returned list.
    pub async fn load(dir: &Path) -> (Self, Vec<Error>) {
        let mut failures = Vec::new();

        let background = match load_clip("Background", &dir.join(BACKGROUND_FILE)).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                failures.push(e);
                None
            }
        };
        let eat = match load_clip("Eat", &dir.join(EAT_FILE)).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                failures.push(e);
                tone(880.0, 0.08).await
            }
        };
        let game_over = match load_clip("Game Over", &dir.join(GAME_OVER_FILE)).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                failures.push(e);
                tone(110.0, 0.25).await
            }
        };

        tracing::info!(dir = %dir.display(), failed = failures.len(), "sounds loaded");
        let bank = Self {
            background,
            eat,
            game_over,
            music_playing: false,
        };
        (bank, failures)
    }

    pub fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::StartMusic => {
                if self.music_playing {
                    return;
                }
                if let Some(music) = &self.background {
                    play_sound(
                        music,
                        PlaySoundParams {
                            looped: true,
                            volume: 0.5,
                        },
                    );
                    self.music_playing = true;
                }
            }
            AudioCue::StopMusic => {
                if let Some(music) = &self.background {
                    stop_sound(music);
                }
                self.music_playing = false;
            }
            AudioCue::Eat => {
                if let Some(eat) = &self.eat {
                    play_sound(
                        eat,
                        PlaySoundParams {
                            looped: false,
                            volume: 0.35,
                        },
                    );
                }
            }
            AudioCue::GameOver => {
                if let Some(game_over) = &self.game_over {
                    play_sound(
                        game_over,
                        PlaySoundParams {
                            looped: false,
                            volume: 0.6,
                        },
                    );
                }
            }
        }
    }
}

pub fn sounds_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("resources").join("sounds")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_describes_pcm16_mono() {
        let wav = sine_wav(8_000, 440.0, 0.5, 1.0);
        let u32_at = |i: usize| u32::from_le_bytes([wav[i], wav[i + 1], wav[i + 2], wav[i + 3]]);
        let u16_at = |i: usize| u16::from_le_bytes([wav[i], wav[i + 1]]);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..16], b"WAVEfmt ");
        assert_eq!(u16_at(22), 1);
        assert_eq!(u32_at(24), 8_000);
        assert_eq!(u32_at(28), 16_000);
        assert_eq!(u16_at(34), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(40), 8_000);
        assert_eq!(u32_at(4), 36 + 8_000);
        assert_eq!(wav.len(), 44 + 8_000);
    }

    #[test]
    fn sine_starts_at_zero_and_respects_volume() {
        let wav = sine_wav(8_000, 1_000.0, 0.25, 0.5);
        let samples: Vec<i16> = wav[44..]
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        assert_eq!(samples.len(), 2_000);
        assert_eq!(samples[0], 0);
        let loudest = samples.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);
        assert!(loudest > 10_000 && loudest <= i16::MAX as u16 / 2 + 1);
    }

    #[test]
    fn sounds_live_under_resources() {
        assert_eq!(
            sounds_dir(Path::new("data")),
            Path::new("data").join("resources").join("sounds")
        );
    }
}
