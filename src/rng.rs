// src/rng.rs
//! Random Number Generation for Price Path Simulation
//!
//! # Design
//!
//! Randomness enters the engine in exactly one place: the daily shock of the
//! price path simulator. Every consumer takes a caller-owned `R: Rng + ?Sized`
//! instead of reaching for a global generator, so that
//! 1. **Reproducibility**: same seed → same path → same backtest metrics
//! 2. **Isolation**: concurrent backtests each own their stream
//! 3. **Testability**: tests can pass `rand::rngs::mock::StepRng` to pin the shocks
//!
//! # Scaled Uniform Shock
//!
//! The simulator approximates a unit-variance Gaussian draw with a rescaled
//! uniform variable:
//! ```text
//! Z = (U - 0.5) * 2√3,   U ~ Uniform[0, 1)
//! E[Z] = 0,   Var[Z] = 12 * Var[U] = 1
//! ```
//! Its support is bounded to `[-√3, √3)`, so the simulated path has thinner
//! tails than a true Brownian path.

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Zero-mean, unit-variance uniform shock distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaledUniform;

impl ScaledUniform {
    /// Half-width of the support, √3
    pub const HALF_WIDTH: f64 = 1.732_050_807_568_877_2;
}

impl Distribution<f64> for ScaledUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        (u - 0.5) * 2.0 * Self::HALF_WIDTH
    }
}

/// Seeded generator for reproducible runs
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy, for unseeded runs
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Seeded generator when a seed is supplied, entropy otherwise
pub fn rng_for_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seed_rng_from_u64(seed),
        None => entropy_rng(),
    }
}

/// One zero-mean, unit-variance shock drawn from `rng`
pub fn get_uniform_shock<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    ScaledUniform.sample(rng)
}
