//! RNG module - uniform random piece generation
//!
//! Every spawn picks one of the seven kinds with equal probability,
//! independently of earlier picks. There is no bag and no history, so
//! droughts and streaks are possible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Produces new pieces positioned at the spawn point.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
}

impl PieceGenerator {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic generator: the same seed yields the same pieces.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick the next kind uniformly from the catalog.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Spawn a fresh piece for a board `board_width` columns wide.
    pub fn spawn(&mut self, board_width: u16) -> Piece {
        Piece::spawn(self.next_kind(), board_width)
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
