//! Entropy quality testing
//!
//! Statistical tests to score the randomness of generated bits.

pub mod tester;

pub use tester::{RandomnessTestResult, RandomnessTester, TestKind, TestOutcome, TesterConfig};
pub use tests::{
    block_frequency_test, chi_square_p_value, chi_square_test, count_ones, frequency_test,
    min_entropy, non_overlapping_template_test, normal_cdf, runs_test, shannon_entropy,
};
