//! Randomness source for battle simulation.
//!
//! Battles consume randomness through the two-operation [`BattleRng`] trait so
//! the production PCG generator and a scripted test source are interchangeable.

use rand::{Rng, SeedableRng};
use rand_pcg::Lcg64Xsh32;

/// The two random draws a battle needs: a continuous value for the damage
/// variance and paralysis checks, and a uniform index for move selection.
pub trait BattleRng {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be greater than zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production source backed by a seeded PCG generator.
pub struct PcgBattleRng {
    rng: Lcg64Xsh32,
}

impl PcgBattleRng {
    /// Build from a u64 seed by duplicating it into the 16-byte PCG seed.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed_bytes: [u8; 16] = [0u8; 16];
        seed_bytes[0..8].copy_from_slice(&seed.to_le_bytes());
        seed_bytes[8..16].copy_from_slice(&seed.to_le_bytes());
        PcgBattleRng {
            rng: Lcg64Xsh32::from_seed(seed_bytes),
        }
    }
}

impl BattleRng for PcgBattleRng {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Scripted source for deterministic tests.
///
/// Cycles through the supplied values. An empty `units` list always yields
/// `1.0` (full damage variance, no paralysis skip); an empty `picks` list
/// always yields index 0.
pub struct FixedRng {
    units: Vec<f64>,
    unit_cursor: usize,
    picks: Vec<usize>,
    pick_cursor: usize,
}

impl FixedRng {
    pub fn new(units: Vec<f64>, picks: Vec<usize>) -> Self {
        FixedRng {
            units,
            unit_cursor: 0,
            picks,
            pick_cursor: 0,
        }
    }
}

impl BattleRng for FixedRng {
    fn unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 1.0;
        }
        let value = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        value
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.pick_cursor % self.picks.len()];
        self.pick_cursor += 1;
        value % len
    }
}
