//! 64-bit Mersenne Twister (MT19937-64)
//!
//! General-purpose engine behind the `MERSENNE_TWISTER` and
//! `QUANTUM_SIMULATED` algorithms, and the seed expander for xoshiro.
//! Implements `rand`'s `RngCore`/`SeedableRng` so the `rand` distributions
//! can draw from it.

use crate::constants::engine::{LCG_MULTIPLIER, MT64_DEFAULT_SEED};
use crate::qrng::BitEngine;
use rand::{Rng, RngCore, SeedableRng};

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
const LOWER_MASK: u64 = 0x0000_0000_7FFF_FFFF;

/// MT19937-64 engine state
#[derive(Clone)]
pub struct Mt64 {
    state: [u64; NN],
    index: usize,
}

impl Mt64 {
    /// Create an engine seeded with `seed`
    pub fn new(seed: u64) -> Self {
        let mut state = [0u64; NN];
        state[0] = seed;
        for i in 1..NN {
            let prev = state[i - 1];
            state[i] = LCG_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        Self { state, index: NN }
    }

    /// Regenerate the whole state block
    fn twist(&mut self) {
        for i in 0..NN {
            let x = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % NN] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + MM) % NN] ^ x_a;
        }
        self.index = 0;
    }

    /// Next tempered 64-bit output
    pub fn next_word(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }

        let mut x = self.state[self.index];
        self.index += 1;

        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;
        x
    }
}

impl Default for Mt64 {
    fn default() -> Self {
        Self::new(MT64_DEFAULT_SEED)
    }
}

impl std::fmt::Debug for Mt64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt64").field("index", &self.index).finish_non_exhaustive()
    }
}

impl RngCore for Mt64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_word() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

impl BitEngine for Mt64 {
    /// Uniform choice between 0 and 1
    fn next_bit(&mut self) -> u8 {
        self.gen_range(0..=1u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_first_output() {
        let mut rng = Mt64::default();
        assert_eq!(rng.next_word(), 14_514_284_786_278_117_030);
    }

    #[test]
    fn test_reference_ten_thousandth_output() {
        let mut rng = Mt64::new(5489);
        let value = (0..10_000).map(|_| rng.next_word()).last().unwrap();
        assert_eq!(value, 9_981_545_732_273_789_042);
    }

    #[test]
    fn test_seed_from_u64_matches_new() {
        let mut a = Mt64::seed_from_u64(42);
        let mut b = Mt64::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_bits_are_binary() {
        let mut rng = Mt64::new(7);
        for _ in 0..1000 {
            assert!(rng.next_bit() <= 1);
        }
    }

    #[test]
    fn test_uniform_floats_in_range() {
        let mut rng = Mt64::new(12345);
        for _ in 0..1000 {
            let f: f64 = rng.gen();
            assert!((0.0..1.0).contains(&f), "Float {} out of range [0, 1)", f);
        }
    }
}
