//! Threshold-based randomness validation
//!
//! Unlike the reporting generator, whose `all_tests_passed` flag is always
//! optimistic, [`RandomnessTester`] derives pass/fail from each p-value
//! against a significance level.

use super::tests::{
    block_frequency_test, chi_square_test, frequency_test, min_entropy,
    non_overlapping_template_test, runs_test, shannon_entropy,
};
use crate::constants::stats::{
    DEFAULT_ALPHA, DEFAULT_BLOCK_SIZE, DEFAULT_TEMPLATE_LENGTH, MIN_TEMPLATE_LENGTH,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A selectable statistical test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Frequency,
    Runs,
    ChiSquare,
    BlockFrequency,
    NonOverlappingTemplate,
}

impl TestKind {
    pub const ALL: [TestKind; 5] = [
        TestKind::Frequency,
        TestKind::Runs,
        TestKind::ChiSquare,
        TestKind::BlockFrequency,
        TestKind::NonOverlappingTemplate,
    ];

    /// Tests run when nothing else is selected
    pub fn default_selection() -> Vec<TestKind> {
        vec![TestKind::Frequency, TestKind::Runs, TestKind::ChiSquare]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Runs => "runs",
            Self::ChiSquare => "chi_square",
            Self::BlockFrequency => "block_frequency",
            Self::NonOverlappingTemplate => "non_overlapping_template",
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TestKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "frequency" | "monobit" => Ok(Self::Frequency),
            "runs" => Ok(Self::Runs),
            "chi_square" | "chisquare" => Ok(Self::ChiSquare),
            "block_frequency" => Ok(Self::BlockFrequency),
            "non_overlapping_template" | "template" => Ok(Self::NonOverlappingTemplate),
            _ => Err(format!("Unknown test: {}", s)),
        }
    }
}

/// Parameters for [`RandomnessTester`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TesterConfig {
    /// Significance level; a test passes when `p_value >= alpha`
    pub alpha: f64,
    /// Block length for the block frequency test
    pub block_size: usize,
    /// Template length for the non-overlapping template test
    pub template_length: usize,
    /// Tests that make up `all_passed`
    pub tests: Vec<TestKind>,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            block_size: DEFAULT_BLOCK_SIZE,
            template_length: DEFAULT_TEMPLATE_LENGTH,
            tests: TestKind::default_selection(),
        }
    }
}

impl TesterConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "Significance level alpha must be between 0 and 1 (exclusive), got {}",
                self.alpha
            )));
        }
        if self.block_size == 0 {
            return Err(Error::InvalidConfig(
                "Block size must be at least 1".to_string(),
            ));
        }
        if self.template_length < MIN_TEMPLATE_LENGTH {
            return Err(Error::InvalidConfig(format!(
                "Template length must be at least {}",
                MIN_TEMPLATE_LENGTH
            )));
        }
        if self.tests.is_empty() {
            return Err(Error::InvalidConfig(
                "At least one test must be selected".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one selected test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub kind: TestKind,
    pub p_value: f64,
    pub passed: bool,
}

/// Results of a validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomnessTestResult {
    /// One outcome per selected test, in selection order
    pub outcomes: Vec<TestOutcome>,
    pub shannon_entropy: f64,
    pub min_entropy: f64,
    pub bits_analyzed: usize,
    /// AND of every outcome's `passed`
    pub all_passed: bool,
}

impl RandomnessTestResult {
    /// Outcome for `kind`, if it was selected
    pub fn outcome(&self, kind: TestKind) -> Option<&TestOutcome> {
        self.outcomes.iter().find(|o| o.kind == kind)
    }

    pub fn failed(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Validating tester with a fixed significance level
#[derive(Debug, Clone)]
pub struct RandomnessTester {
    config: TesterConfig,
}

impl RandomnessTester {
    /// Create a tester, rejecting invalid parameters up front
    pub fn new(mut config: TesterConfig) -> Result<Self> {
        config.validate()?;
        // Keep the first occurrence of each selected test
        let mut seen = Vec::with_capacity(config.tests.len());
        config.tests.retain(|kind| {
            if seen.contains(kind) {
                false
            } else {
                seen.push(*kind);
                true
            }
        });
        Ok(Self { config })
    }

    pub fn config(&self) -> &TesterConfig {
        &self.config
    }

    /// Raw p-value of one test under this tester's parameters
    pub fn p_value(&self, kind: TestKind, bits: &[u8]) -> f64 {
        match kind {
            TestKind::Frequency => frequency_test(bits),
            TestKind::Runs => runs_test(bits),
            TestKind::ChiSquare => chi_square_test(bits),
            TestKind::BlockFrequency => block_frequency_test(bits, self.config.block_size),
            TestKind::NonOverlappingTemplate => {
                non_overlapping_template_test(bits, self.config.template_length)
            }
        }
    }

    /// Run every selected test against `bits`
    pub fn test(&self, bits: &[u8]) -> RandomnessTestResult {
        let outcomes: Vec<TestOutcome> = self
            .config
            .tests
            .iter()
            .map(|&kind| {
                let p_value = self.p_value(kind, bits);
                TestOutcome {
                    kind,
                    p_value,
                    passed: p_value >= self.config.alpha,
                }
            })
            .collect();

        let all_passed = outcomes.iter().all(|o| o.passed);

        for outcome in outcomes.iter().filter(|o| !o.passed) {
            tracing::debug!(
                test = %outcome.kind,
                p_value = outcome.p_value,
                alpha = self.config.alpha,
                "Randomness test failed"
            );
        }

        RandomnessTestResult {
            outcomes,
            shannon_entropy: shannon_entropy(bits),
            min_entropy: min_entropy(bits),
            bits_analyzed: bits.len(),
            all_passed,
        }
    }
}

impl Default for RandomnessTester {
    fn default() -> Self {
        Self {
            config: TesterConfig::default(),
        }
    }
}
