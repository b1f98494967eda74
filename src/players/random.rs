use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MoveSource;
use crate::error::MoveSourceError;
use crate::game::GameState;

/// Computer opponent that picks uniformly among the columns that still
/// have room.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic opponent for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise seeded from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Pick one of the currently legal columns.
    pub fn choose(&mut self, state: &GameState) -> Option<usize> {
        let columns = state.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomOpponent {
    fn next_column(&mut self, state: &GameState) -> Result<isize, MoveSourceError> {
        self.choose(state)
            .map(|col| col as isize)
            .ok_or(MoveSourceError::NoLegalColumns)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
