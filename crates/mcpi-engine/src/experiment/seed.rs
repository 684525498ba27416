use std::fmt;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Seed for deterministic sampling.
///
/// The same seed always yields the same sample stream, so two runs with
/// identical `(points, blocks, seed)` produce bit-identical curves.
///
/// # Example
///
/// ```
/// use mcpi_engine::ExperimentSeed;
/// use rand::Rng as _;
///
/// let seed = ExperimentSeed::from(42);
/// let a: u32 = seed.rng().random();
/// let b: u32 = seed.rng().random();
/// assert_eq!(a, b);
///
/// // Fresh seeds come from any generator
/// let random_seed: ExperimentSeed = rand::rng().random();
/// # let _ = random_seed;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct ExperimentSeed(u64);

impl ExperimentSeed {
    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Creates a fresh generator positioned at the start of this seed's stream.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::seed_from_u64(self.0)
    }
}

impl fmt::Display for ExperimentSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Allows generating random `ExperimentSeed` values with `rng.random()`.
impl Distribution<ExperimentSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ExperimentSeed {
        ExperimentSeed(rng.random())
    }
}
