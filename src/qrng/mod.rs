//! Bit generation
//!
//! Four classical engines behind one capability, [`BitEngine`]. None of them
//! is quantum; `QUANTUM_SIMULATED` only imitates a slightly noisy
//! measurement.
//!
//! ## Flex Point
//! Adding a new algorithm requires:
//! 1. Create `src/qrng/{engine}.rs` with a struct implementing `BitEngine`
//! 2. Add a variant to [`Algorithm`] and to [`BitSource`]
//! 3. List it in [`available_algorithms`]

pub mod generator;
pub mod mt64;
pub mod pcg;
pub mod seed;
pub mod simulated;
pub mod xoshiro;

pub use generator::{GenerationResult, Qrng, TestReport};
pub use seed::{resolve_seed, Clock, FixedClock, SystemClock};

use crate::error::{Error, Result};
use mt64::Mt64;
use pcg::Pcg32;
use serde::{Deserialize, Serialize};
use simulated::SimulatedMeasurement;
use xoshiro::Xoshiro256StarStar;

/// Produces one bit (0 or 1) per call
pub trait BitEngine {
    fn next_bit(&mut self) -> u8;
}

/// Bit generation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// MT19937-64, uniform choice per bit
    #[default]
    MersenneTwister,
    /// Xoshiro256**, low bit of each output
    Xoshiro,
    /// PCG32, low bit of each output
    Pcg,
    /// Jittered-probability coin flips
    QuantumSimulated,
}

impl Algorithm {
    /// All algorithms in comparison order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::MersenneTwister,
        Algorithm::Xoshiro,
        Algorithm::Pcg,
        Algorithm::QuantumSimulated,
    ];

    /// Canonical identifier, as accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Self::MersenneTwister => "MERSENNE_TWISTER",
            Self::Xoshiro => "XOSHIRO",
            Self::Pcg => "PCG",
            Self::QuantumSimulated => "QUANTUM_SIMULATED",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MersenneTwister => "Mersenne Twister",
            Self::Xoshiro => "Xoshiro256**",
            Self::Pcg => "PCG",
            Self::QuantumSimulated => "Simulated Quantum",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MersenneTwister => "64-bit Mersenne Twister (default, high quality)",
            Self::Xoshiro => "Xoshiro256** xor/shift/rotate scrambler (fast)",
            Self::Pcg => "PCG32 permuted congruential generator",
            Self::QuantumSimulated => "Simulated measurement noise with slight bias",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    /// Case-sensitive match against the canonical identifiers
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| format!("Unknown algorithm: {}", s))
    }
}

/// Information about an algorithm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    /// Identifier (used in config/CLI)
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// List all available algorithms with their info
pub fn available_algorithms() -> Vec<AlgorithmInfo> {
    Algorithm::ALL
        .iter()
        .map(|a| AlgorithmInfo {
            name: a.id().to_string(),
            description: a.description().to_string(),
        })
        .collect()
}

/// Validated generation parameters
///
/// Construction fails for zero counts or a bit total that does not fit in
/// `usize`; a value of this type always describes a generable sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    qubit_count: usize,
    shot_count: usize,
    seed: u64,
    algorithm: Algorithm,
}

impl GenerationConfig {
    pub fn new(
        qubit_count: usize,
        shot_count: usize,
        seed: u64,
        algorithm: Algorithm,
    ) -> Result<Self> {
        if qubit_count == 0 {
            return Err(Error::InvalidConfig(
                "Number of qubits must be at least 1".to_string(),
            ));
        }
        if shot_count == 0 {
            return Err(Error::InvalidConfig(
                "Number of shots must be at least 1".to_string(),
            ));
        }
        if qubit_count.checked_mul(shot_count).is_none() {
            return Err(Error::InvalidConfig(format!(
                "{} qubits x {} shots overflows the bit count",
                qubit_count, shot_count
            )));
        }

        Ok(Self {
            qubit_count,
            shot_count,
            seed,
            algorithm,
        })
    }

    /// Same seed and algorithm, different shape
    pub fn reshape(&self, qubit_count: usize, shot_count: usize) -> Result<Self> {
        Self::new(qubit_count, shot_count, self.seed, self.algorithm)
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    pub fn shot_count(&self) -> usize {
        self.shot_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Total requested bits (`qubit_count * shot_count`)
    pub fn total_bits(&self) -> usize {
        // Overflow is rejected in `new`
        self.qubit_count * self.shot_count
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            qubit_count: 1,
            shot_count: 1000,
            seed: 0,
            algorithm: Algorithm::default(),
        }
    }
}

/// Generated bits, one `u8` (0 or 1) per bit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitSequence(Vec<u8>);

impl BitSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn ones(&self) -> usize {
        crate::entropy::count_ones(&self.0)
    }

    pub fn zeros(&self) -> usize {
        self.len() - self.ones()
    }

    /// First `n` bits rendered as a string of `0`/`1`
    pub fn sample(&self, n: usize) -> String {
        self.0
            .iter()
            .take(n)
            .map(|&b| if b & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

impl AsRef<[u8]> for BitSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Engine selected for one generation call
#[derive(Debug, Clone)]
pub enum BitSource {
    MersenneTwister(Mt64),
    Xoshiro(Xoshiro256StarStar),
    Pcg(Pcg32),
    QuantumSimulated(SimulatedMeasurement),
}

impl BitSource {
    /// Build the engine for `algorithm` seeded with an already-resolved seed
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        match algorithm {
            Algorithm::MersenneTwister => Self::MersenneTwister(Mt64::new(seed)),
            Algorithm::Xoshiro => Self::Xoshiro(Xoshiro256StarStar::new(seed)),
            Algorithm::Pcg => Self::Pcg(Pcg32::new(seed)),
            Algorithm::QuantumSimulated => {
                Self::QuantumSimulated(SimulatedMeasurement::new(seed))
            }
        }
    }
}

impl BitEngine for BitSource {
    fn next_bit(&mut self) -> u8 {
        match self {
            Self::MersenneTwister(rng) => rng.next_bit(),
            Self::Xoshiro(rng) => rng.next_bit(),
            Self::Pcg(rng) => rng.next_bit(),
            Self::QuantumSimulated(rng) => rng.next_bit(),
        }
    }
}

/// Generate `config.total_bits()` bits, seeding from the wall clock when
/// the configured seed is 0
pub fn generate(config: &GenerationConfig) -> Result<BitSequence> {
    generate_with_clock(config, &SystemClock)
}

/// Generate bits, resolving a zero seed through `clock`
pub fn generate_with_clock(config: &GenerationConfig, clock: &dyn Clock) -> Result<BitSequence> {
    let count = config.total_bits();
    let seed = resolve_seed(config.seed(), clock);

    let mut bits = Vec::new();
    bits.try_reserve_exact(count).map_err(|e| {
        Error::Generation(format!("cannot allocate {} bits: {}", count, e))
    })?;

    let mut source = BitSource::new(config.algorithm(), seed);
    bits.extend((0..count).map(|_| source.next_bit()));

    Ok(BitSequence(bits))
}
