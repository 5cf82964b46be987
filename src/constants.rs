//! Centralized constants for the qrng-sim crate
//!
//! Algorithm parameters and statistical thresholds shared across modules.

/// Engine parameters
pub mod engine {
    /// LCG multiplier shared by MT19937-64 seeding and the PCG core
    pub const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

    /// Default seed of the reference MT19937-64 implementation
    pub const MT64_DEFAULT_SEED: u64 = 5489;

    /// Maximum deviation of the simulated measurement probability from 0.5,
    /// expressed as the scale applied to `r1 - 0.5`
    pub const SIMULATED_BIAS_SCALE: f64 = 0.1;
}

/// Statistical test settings
pub mod stats {
    /// Runs test needs at least this many bits to produce a p-value
    pub const MIN_RUNS_BITS: usize = 10;

    /// Default significance level for the validating tester
    pub const DEFAULT_ALPHA: f64 = 0.01;

    /// Default block length for the block frequency test
    pub const DEFAULT_BLOCK_SIZE: usize = 128;

    /// Default template length for the non-overlapping template test
    pub const DEFAULT_TEMPLATE_LENGTH: usize = 9;

    /// Shortest template the template test accepts
    pub const MIN_TEMPLATE_LENGTH: usize = 2;
}

/// Report presentation
pub mod report {
    /// Number of leading bits shown as a sample in text output
    pub const SAMPLE_BITS: usize = 20;
}
