//! Uniform-random commander

use crate::battle::ai::{Commander, TargetView};
use crate::core::error::{Result, SiegeError};
use crate::core::types::PlayerClass;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks a standing target uniformly at random
#[derive(Debug, Clone)]
pub struct RandomCommander {
    rng: ChaCha8Rng,
}

impl RandomCommander {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for RandomCommander {
    fn default() -> Self {
        Self::new()
    }
}

impl Commander for RandomCommander {
    fn choose_target(&mut self, view: &TargetView) -> Result<usize> {
        if view.is_empty() {
            return Err(SiegeError::InvalidTarget {
                index: 0,
                available: 0,
            });
        }
        Ok(self.rng.gen_range(0..view.options.len()))
    }
}

/// Pick one of the playable classes uniformly
pub fn random_class<R: Rng + ?Sized>(rng: &mut R) -> PlayerClass {
    PlayerClass::PLAYABLE
        .choose(rng)
        .copied()
        .unwrap_or(PlayerClass::Warrior)
}
