use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks food cells. Owns the only random generator of the game, which is
/// seeded once and never reseeded.
pub struct FoodSpawner<R = StdRng> {
    rng: R,
}

impl FoodSpawner<StdRng> {
    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        log::debug!("food rng seed {}", seed);
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        FoodSpawner { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> FoodSpawner<R> {
    pub fn with_rng(rng: R) -> Self {
        FoodSpawner { rng }
    }

    /// Samples interior cells until one is free of the snake.
    ///
    /// Never returns if the snake covers the whole interior.
    pub fn place(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        loop {
            let x = self.rng.gen_range(1..grid.width() - 1);
            let y = self.rng.gen_range(1..grid.height() - 1);

            if !snake.contains((x, y)) {
                log::debug!("food placed at {:?}", (x, y));
                return (x, y);
            }
        }
    }
}
