//! Piece spawning - uniformly random kind selection
//!
//! Draws are independent and uniform over the seven kinds; repeats are
//! allowed (no bag fairness). Entropy-seeded by default, seedable for
//! deterministic tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gridfall_types::PieceKind;

use crate::piece::ActivePiece;

/// Uniform piece generator backing session spawns
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SmallRng,
}

impl Spawner {
    /// Entropy-seeded spawner for normal gameplay
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic spawner for tests
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw the next kind: discrete uniform over the seven kinds
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Fresh piece of a random kind at the spawn origin
    pub fn next_piece(&mut self) -> ActivePiece {
        ActivePiece::spawn(self.next_kind())
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
