use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::selector::MoveSelector;

/// A policy that picks uniformly at random among open columns.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible selector for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select_column(&mut self, board: &Board, _player: Player) -> usize {
        let open = board.open_columns();
        assert!(!open.is_empty(), "no open column to play: the board is full");
        open[self.rng.random_range(0..open.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
