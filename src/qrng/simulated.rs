//! Simulated quantum measurement
//!
//! NOT a quantum process. Each bit is a coin flip whose probability of 1
//! is itself jittered around 0.5, approximating a slightly noisy source.

use crate::constants::engine::SIMULATED_BIAS_SCALE;
use crate::qrng::mt64::Mt64;
use crate::qrng::BitEngine;
use rand::Rng;

/// Biased-noise bit synthesizer backed by MT19937-64
#[derive(Debug, Clone)]
pub struct SimulatedMeasurement {
    rng: Mt64,
}

impl SimulatedMeasurement {
    /// Create a synthesizer seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self { rng: Mt64::new(seed) }
    }

    /// Probability of measuring 1 for a uniform draw `r` in [0, 1)
    ///
    /// Always within [0.45, 0.55].
    pub fn acceptance_probability(r: f64) -> f64 {
        0.5 + (r - 0.5) * SIMULATED_BIAS_SCALE
    }
}

impl BitEngine for SimulatedMeasurement {
    fn next_bit(&mut self) -> u8 {
        let p = Self::acceptance_probability(self.rng.gen::<f64>());
        let r: f64 = self.rng.gen();
        u8::from(r < p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acceptance_probability_bounds() {
        assert_relative_eq!(SimulatedMeasurement::acceptance_probability(0.0), 0.45);
        assert_relative_eq!(SimulatedMeasurement::acceptance_probability(0.5), 0.5);
        assert!(SimulatedMeasurement::acceptance_probability(0.999_999) < 0.55);
    }

    #[test]
    fn test_roughly_balanced() {
        let mut source = SimulatedMeasurement::new(42);
        let ones: u32 = (0..10_000).map(|_| source.next_bit() as u32).sum();
        let ratio = ones as f64 / 10_000.0;
        assert!((0.45..=0.55).contains(&ratio), "ratio {} out of range", ratio);
    }

    #[test]
    fn test_consumes_two_draws_per_bit() {
        let mut source = SimulatedMeasurement::new(3);
        let mut reference = Mt64::new(3);
        source.next_bit();
        let _: f64 = reference.gen();
        let _: f64 = reference.gen();
        assert_eq!(source.rng.next_word(), reference.next_word());
    }
}
