//! Runtime configuration for the terminal runner.
//!
//! Everything comes from `BLOCKFALL_*` environment variables. A value that
//! does not parse falls back to its default and leaves a warning behind for
//! the caller to print.

use std::path::PathBuf;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_FALL_MS: &str = "BLOCKFALL_FALL_MS";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_SOUND_DIR: &str = "BLOCKFALL_SOUND_DIR";
pub const ENV_MUTE: &str = "BLOCKFALL_MUTE";

pub const MIN_BOARD_DIM: u16 = 4;
pub const MAX_BOARD_DIM: u16 = 64;
pub const MIN_FALL_MS: u32 = 16;

/// Sound directory shipped with the crate.
pub fn default_sound_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/sounds"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fall_ms: u32,
    /// Fixed seed for a reproducible piece sequence.
    pub seed: Option<u64>,
    pub sound_dir: PathBuf,
    pub mute: bool,
    /// Problems found while reading the environment.
    pub warnings: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_ms: FALL_INTERVAL_MS,
            seed: None,
            sound_dir: default_sound_dir(),
            mute: false,
            warnings: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut warnings = Vec::new();

        if let Some(w) = parse_var::<u16, _>(&mut lookup, ENV_WIDTH, &mut warnings) {
            cfg.width = w.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        }
        if let Some(h) = parse_var::<u16, _>(&mut lookup, ENV_HEIGHT, &mut warnings) {
            cfg.height = h.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        }
        if let Some(ms) = parse_var::<u32, _>(&mut lookup, ENV_FALL_MS, &mut warnings) {
            cfg.fall_ms = ms.max(MIN_FALL_MS);
        }
        cfg.seed = parse_var::<u64, _>(&mut lookup, ENV_SEED, &mut warnings);

        if let Some(dir) = non_empty(&mut lookup, ENV_SOUND_DIR) {
            cfg.sound_dir = PathBuf::from(dir);
        }
        cfg.mute = non_empty(&mut lookup, ENV_MUTE)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        cfg.warnings = warnings;
        cfg
    }
}

fn non_empty<F>(lookup: &mut F, key: &str) -> Option<String>
where
    F: FnMut(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_var<T, F>(lookup: &mut F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: std::str::FromStr,
    F: FnMut(&str) -> Option<String>,
{
    let raw = non_empty(lookup, key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warnings.push(format!("ignoring {key}={raw:?}: not a valid number"));
            None
        }
    }
}
