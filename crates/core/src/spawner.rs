//! Gate spawner - seeded random gate generation
//!
//! Each spawn draws one offset in `[0, 1)` and turns it into a gate with
//! [`Gate::from_offset`]. The generator is a PCG seeded from the game seed, so
//! a given seed always produces the same sequence of gates.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::obstacles::Gate;

#[derive(Debug, Clone)]
pub struct GateSpawner {
    seed: u64,
    rng: Pcg32,
    spawned: u64,
}

impl GateSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawned: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Gates produced since construction.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Draw the next random offset in `[0, 1)`.
    pub fn next_offset(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    pub fn next_gate(&mut self) -> Gate {
        let r = self.next_offset();
        self.spawned += 1;
        Gate::from_offset(r)
    }
}

impl Default for GateSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
