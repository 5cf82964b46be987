//! Validate command handler
//!
//! Generates a sequence, then runs the validating tester against it.
//! Exits with status 1 when any selected test fails.

use crate::cli::{formatter, resolve_algorithm};
use crate::config::Config;
use crate::entropy::{RandomnessTester, TestKind, TesterConfig};
use crate::error::{Error, Result};
use crate::qrng::{generate, GenerationConfig};
use clap::Args;

/// Validate command arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Number of qubits measured per shot
    #[arg(long, short = 'q')]
    pub qubits: Option<usize>,

    /// Number of shots
    #[arg(long, short = 's')]
    pub shots: Option<usize>,

    /// Seed (0 = derive from the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Algorithm identifier (e.g. MERSENNE_TWISTER)
    #[arg(long, short = 'a')]
    pub algorithm: Option<String>,

    /// Significance level, strictly between 0 and 1
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Block length for the block frequency test
    #[arg(long)]
    pub block_size: Option<usize>,

    /// Template length for the non-overlapping template test
    #[arg(long)]
    pub template_length: Option<usize>,

    /// Comma-separated tests to run (e.g. frequency,runs,block_frequency)
    #[arg(long, value_delimiter = ',')]
    pub tests: Vec<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

impl ValidateArgs {
    /// Merge command-line overrides over the configured tester settings
    fn tester_config(&self, config: &Config) -> Result<TesterConfig> {
        let mut tester = config.tester.to_tester_config()?;

        if let Some(alpha) = self.alpha {
            tester.alpha = alpha;
        }
        if let Some(block_size) = self.block_size {
            tester.block_size = block_size;
        }
        if let Some(template_length) = self.template_length {
            tester.template_length = template_length;
        }
        if !self.tests.is_empty() {
            tester.tests = self
                .tests
                .iter()
                .map(|name| name.trim().parse::<TestKind>().map_err(Error::InvalidConfig))
                .collect::<Result<Vec<_>>>()?;
        }

        Ok(tester)
    }
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> Result<()> {
    let config = Config::load()?;

    let tester = RandomnessTester::new(args.tester_config(&config)?)?;
    let algorithm = resolve_algorithm(args.algorithm.as_deref(), &config);
    let generation = GenerationConfig::new(
        args.qubits.unwrap_or(config.defaults.qubits),
        args.shots.unwrap_or(config.defaults.shots),
        args.seed.unwrap_or(config.defaults.seed),
        algorithm,
    )?;
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = formatter(&format)?;

    tracing::info!(
        algorithm = %algorithm,
        bits = generation.total_bits(),
        tests = tester.config().tests.len(),
        "Starting validation"
    );
    let bits = generate(&generation)?;
    let result = tester.test(bits.as_slice());

    print!(
        "{}",
        formatter.format_validation(&generation, &result, tester.config().alpha)?
    );

    if !result.all_passed {
        std::process::exit(1);
    }

    Ok(())
}
