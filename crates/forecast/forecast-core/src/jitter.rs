//! Jitter sources
//!
//! The projection draws one unit sample per point. `NoJitter` makes the
//! output a pure linear extrapolation; `SeededJitter` makes it
//! reproducible.

use forecast_spi::JitterSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Entropy-seeded jitter, different on every run
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn sample(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic jitter from a fixed seed
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always the midpoint: zero perturbation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self) -> f64 {
        0.5
    }
}

/// Always the same sample, kept inside `[0, 1)`
#[derive(Debug, Clone, Copy)]
pub struct ConstantJitter(f64);

impl ConstantJitter {
    pub fn new(unit: f64) -> Self {
        Self(unit.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl JitterSource for ConstantJitter {
    fn sample(&mut self) -> f64 {
        self.0
    }
}
