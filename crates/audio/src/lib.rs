//! Sound effects for game cues.
//!
//! [`SoundBank`] holds the encoded bytes of one sound per [`Cue`]. Loading is
//! per slot: a file that is missing or cannot be decoded is reported once and
//! that slot stays silent for the rest of the session.
//!
//! [`SoundBoard`] owns the audio output device and plays bank entries. Every
//! play is fire-and-forget on its own detached `rodio::Sink`, so overlapping
//! cues mix instead of queueing behind each other.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

pub use blockfall_types as types;

use types::{Cue, CueSink};

/// Playback volume for every effect.
pub const EFFECT_VOLUME: f32 = 0.6;

/// File name of the sound for `cue` inside the sound directory.
pub fn file_name(cue: Cue) -> &'static str {
    match cue {
        Cue::Rotate => "rotate.mp3",
        Cue::Lock => "lock.mp3",
        Cue::LineClear => "clear.mp3",
        Cue::Move => "move.mp3",
        Cue::Fall => "fall.mp3",
    }
}

/// Encoded sound data, one optional slot per cue.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    slots: [Option<Arc<[u8]>>; Cue::COUNT],
}

impl SoundBank {
    /// Load every cue's sound from `dir`.
    ///
    /// Never fails as a whole; failed slots are logged and left empty.
    pub fn load(dir: &Path) -> Self {
        let mut bank = Self::default();
        if !dir.is_dir() {
            eprintln!("[Audio] no sound directory at {}", dir.display());
            return bank;
        }
        for cue in Cue::ALL {
            let path = dir.join(file_name(cue));
            match load_slot(&path) {
                Ok(bytes) => bank.slots[cue.index()] = Some(bytes),
                Err(err) => eprintln!("[Audio] {} disabled: {err:#}", cue.as_str()),
            }
        }
        bank
    }

    pub fn get(&self, cue: Cue) -> Option<&Arc<[u8]>> {
        self.slots[cue.index()].as_ref()
    }

    pub fn is_loaded(&self, cue: Cue) -> bool {
        self.get(cue).is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Read `path` and check that it decodes before keeping it.
fn load_slot(path: &Path) -> Result<Arc<[u8]>> {
    let bytes: Arc<[u8]> = fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?
        .into();
    Decoder::new(Cursor::new(Arc::clone(&bytes)))
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(bytes)
}

/// Audio output plus the loaded sounds.
pub struct SoundBoard {
    // Dropping the stream stops all playback.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
}

impl SoundBoard {
    /// Open the default output device and load sounds from `dir`.
    ///
    /// Fails only when there is no usable output device.
    pub fn open(dir: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("opening default audio output")?;
        Ok(Self {
            _stream: stream,
            handle,
            bank: SoundBank::load(dir),
        })
    }

    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }

    fn play_bytes(&self, bytes: &Arc<[u8]>) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(Arc::clone(bytes))) else {
            return;
        };
        sink.set_volume(EFFECT_VOLUME);
        sink.append(source);
        sink.detach();
    }
}

impl CueSink for SoundBoard {
    fn play(&mut self, cue: Cue) {
        if let Some(bytes) = self.bank.get(cue) {
            self.play_bytes(bytes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "blockfall-audio-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// A short 16-bit mono PCM WAV file.
    fn tiny_wav() -> Vec<u8> {
        let samples: [i16; 8] = [0, 1000, 2000, 1000, 0, -1000, -2000, -1000];
        let data_len = (samples.len() * 2) as u32;
        let sample_rate: u32 = 8000;

        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = Cue::ALL.iter().map(|&c| file_name(c)).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Cue::COUNT);
        assert_eq!(file_name(Cue::LineClear), "clear.mp3");
    }

    #[test]
    fn test_missing_directory_leaves_all_slots_empty() {
        let dir = std::env::temp_dir().join("blockfall-audio-does-not-exist");
        let bank = SoundBank::load(&dir);
        assert_eq!(bank.loaded_count(), 0);
        for cue in Cue::ALL {
            assert!(!bank.is_loaded(cue));
        }
    }

    #[test]
    fn test_each_slot_loads_independently() {
        let dir = scratch_dir("partial");
        fs::write(dir.join(file_name(Cue::Lock)), tiny_wav()).unwrap();
        fs::write(dir.join(file_name(Cue::Rotate)), b"definitely not audio").unwrap();

        let bank = SoundBank::load(&dir);
        assert!(bank.is_loaded(Cue::Lock));
        assert!(!bank.is_loaded(Cue::Rotate));
        assert!(!bank.is_loaded(Cue::LineClear));
        assert_eq!(bank.loaded_count(), 1);

        let _ = fs::remove_dir_all(&dir);
    }
}
