//! Reporting generator
//!
//! Generates a sequence and attaches every metric to it. The report's
//! `all_tests_passed` flag is display-only: it is always `true` for a
//! successful run, whatever the p-values say. Use
//! [`RandomnessTester`](crate::entropy::RandomnessTester) for real
//! pass/fail gating.

use crate::entropy;
use crate::error::Result;
use crate::qrng::{generate_with_clock, BitSequence, Clock, GenerationConfig, SystemClock};
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

/// Counts and metrics for one generated sequence
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestReport {
    pub ones: usize,
    pub zeros: usize,
    pub frequency_pvalue: f64,
    pub chi_square_pvalue: f64,
    pub runs_pvalue: f64,
    pub shannon_entropy: f64,
    pub min_entropy: f64,
    /// Optimistic display flag, see module docs
    pub all_tests_passed: bool,
    #[serde(rename = "generation_time_ms", serialize_with = "serialize_millis")]
    pub generation_time: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

impl TestReport {
    /// Score `bits`, marking the report as passed
    pub fn from_bits(bits: &[u8], generation_time: Duration) -> Self {
        let ones = entropy::count_ones(bits);
        Self {
            ones,
            zeros: bits.len() - ones,
            frequency_pvalue: entropy::frequency_test(bits),
            chi_square_pvalue: entropy::chi_square_test(bits),
            runs_pvalue: entropy::runs_test(bits),
            shannon_entropy: entropy::shannon_entropy(bits),
            min_entropy: entropy::min_entropy(bits),
            all_tests_passed: true,
            generation_time,
            error: None,
        }
    }

    /// Report for a run that produced no usable bits
    pub fn failed(message: impl Into<String>, generation_time: Duration) -> Self {
        Self {
            all_tests_passed: false,
            generation_time,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn total_bits(&self) -> usize {
        self.ones + self.zeros
    }

    /// Percentage of ones, 0.0 for an empty sequence
    pub fn ones_percent(&self) -> f64 {
        match self.total_bits() {
            0 => 0.0,
            n => self.ones as f64 * 100.0 / n as f64,
        }
    }

    pub fn zeros_percent(&self) -> f64 {
        match self.total_bits() {
            0 => 0.0,
            n => self.zeros as f64 * 100.0 / n as f64,
        }
    }
}

/// Generated bits plus their report
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub bits: BitSequence,
    pub report: TestReport,
}

impl GenerationResult {
    pub fn is_ok(&self) -> bool {
        self.report.error.is_none()
    }
}

/// Reporting generator bound to one validated configuration
#[derive(Debug, Clone)]
pub struct Qrng {
    config: GenerationConfig,
}

impl Qrng {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate and score, seeding from the wall clock when the seed is 0
    pub fn generate(&self) -> GenerationResult {
        self.generate_with_clock(&SystemClock)
    }

    /// Generate and score, resolving a zero seed through `clock`
    ///
    /// A generation failure is folded into the report rather than returned.
    pub fn generate_with_clock(&self, clock: &dyn Clock) -> GenerationResult {
        let start = Instant::now();
        let bits = generate_with_clock(&self.config, clock);
        let elapsed = start.elapsed();

        match bits {
            Ok(bits) => {
                let report = TestReport::from_bits(bits.as_slice(), elapsed);
                tracing::debug!(
                    algorithm = %self.config.algorithm(),
                    bits = bits.len(),
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    shannon_entropy = report.shannon_entropy,
                    "Generated bit sequence"
                );
                GenerationResult { bits, report }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Bit generation failed");
                GenerationResult {
                    bits: BitSequence::default(),
                    report: TestReport::failed(e.to_string(), elapsed),
                }
            }
        }
    }

    /// Generate with the same seed and algorithm but a different shape
    ///
    /// An invalid shape is a configuration error and nothing is generated.
    pub fn generate_shape(&self, qubit_count: usize, shot_count: usize) -> Result<GenerationResult> {
        let config = self.config.reshape(qubit_count, shot_count)?;
        Ok(Qrng::new(config).generate())
    }
}
