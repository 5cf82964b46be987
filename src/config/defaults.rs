//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{report, stats};

/// Default number of qubits per shot
pub const DEFAULT_QUBITS: usize = 1;

/// Default number of measurement shots
pub const DEFAULT_SHOTS: usize = 1000;

/// Default seed (fixed for reproducibility; 0 means time-based)
pub const DEFAULT_SEED: u64 = 42;

/// Default algorithm identifier
pub const DEFAULT_ALGORITHM: &str = "MERSENNE_TWISTER";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default number of sample bits in text output
pub const DEFAULT_SAMPLE_BITS: usize = report::SAMPLE_BITS;

/// Default significance level
pub const DEFAULT_ALPHA: f64 = stats::DEFAULT_ALPHA;

/// Default block size for block frequency
pub const DEFAULT_BLOCK_SIZE: usize = stats::DEFAULT_BLOCK_SIZE;

/// Default template length
pub const DEFAULT_TEMPLATE_LENGTH: usize = stats::DEFAULT_TEMPLATE_LENGTH;

/// Default selection of tests for `validate`
pub const DEFAULT_TESTS: [&str; 3] = ["frequency", "runs", "chi_square"];

/// Default number of shots for `compare`
pub const DEFAULT_COMPARE_SHOTS: usize = 10_000;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "qrng-sim";
