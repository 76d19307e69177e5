use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the uniform draws used to perturb monthly growth and cost.
pub trait VarianceSource {
    /// Returns a value in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Never perturbs anything; every draw is `0.0` (clamped into the range).
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroVariance;

impl VarianceSource for ZeroVariance {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        0.0_f64.clamp(low, high)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedVariance {
    values: Vec<f64>,
    next: usize,
}

impl FixedVariance {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl VarianceSource for FixedVariance {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0_f64.clamp(low, high);
        }
        let value = self.values[self.next % self.values.len()];
        self.next = self.next.wrapping_add(1);
        value.clamp(low, high)
    }
}

/// Pseudo-random draws from a standard RNG owned by a single projection.
#[derive(Debug, Clone)]
pub struct RandomVariance {
    rng: StdRng,
}

impl RandomVariance {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl VarianceSource for RandomVariance {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}
