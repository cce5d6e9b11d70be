use rand::{Rng, SeedableRng, rngs::StdRng};

/// Explicit pseudo-random source threaded through every engine and orchestrator draw.
///
/// Draw order is part of the reproducibility contract: per overlay the engine consumes the
/// rotation angle first, then the x offset, then the y offset. A single instance is meant for
/// one thread; parallel callers should give each worker its own seeded source.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomSource {
    /// Deterministic source; identical seeds yield identical draw sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Source seeded once from OS entropy.
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seed used by [`RandomSource::from_seed`], if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform angle in degrees from `[-max_abs, max_abs]`.
    pub fn angle_deg(&mut self, max_abs: f64) -> f64 {
        let max_abs = max_abs.abs();
        self.rng.random_range(-max_abs..=max_abs)
    }

    /// Uniform integer offset from `[0, max]`.
    pub fn offset(&mut self, max: u32) -> u32 {
        self.rng.random_range(0..=max)
    }

    /// Uniform index into a collection of `len` items.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
