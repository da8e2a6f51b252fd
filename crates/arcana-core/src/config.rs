//! Configuration for a single reading.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::TarotResult;
use crate::reading::{Reading, compose_spread};
use crate::spread::SpreadKind;

/// Settings for laying out one reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingConfig {
    /// Which spread to lay.
    pub spread: SpreadKind,
    /// Whether cards may land reversed.
    pub allow_reversals: bool,
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl ReadingConfig {
    /// Set the spread.
    pub fn with_spread(mut self, spread: SpreadKind) -> Self {
        self.spread = spread;
        self
    }

    /// Allow or forbid reversed cards.
    pub fn with_reversals(mut self, allow: bool) -> Self {
        self.allow_reversals = allow;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A fresh random source for this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Lay out the configured spread with a fresh random source.
    pub fn compose(&self) -> TarotResult<Reading> {
        let mut rng = self.rng();
        compose_spread(self.spread.spread(), self.allow_reversals, &mut rng)
    }
}
