//! Compare command handler
//!
//! Runs every algorithm with identical parameters.

use crate::cli::formatter;
use crate::config::defaults::{DEFAULT_COMPARE_SHOTS, DEFAULT_QUBITS, DEFAULT_SEED};
use crate::config::Config;
use crate::error::Result;
use crate::format::ComparisonRun;
use crate::qrng::{Algorithm, GenerationConfig, Qrng};
use clap::Args;

/// Compare command arguments
#[derive(Args)]
pub struct CompareArgs {
    /// Number of qubits
    pub qubits: Option<usize>,

    /// Number of shots
    pub shots: Option<usize>,

    /// Seed shared by every algorithm
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the compare command
///
/// Shape and seed defaults are fixed rather than read from the config file.
pub fn run(args: CompareArgs) -> Result<()> {
    let config = Config::load()?;
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let formatter = formatter(&format)?;

    let qubits = args.qubits.unwrap_or(DEFAULT_QUBITS);
    let shots = args.shots.unwrap_or(DEFAULT_COMPARE_SHOTS);
    let seed = args.seed.unwrap_or(DEFAULT_SEED);

    tracing::info!(qubits, shots, seed, "Comparing algorithms");
    let runs = compare(qubits, shots, seed)?;

    print!("{}", formatter.format_comparison(&runs)?);
    Ok(())
}

/// Generate once per algorithm, in [`Algorithm::ALL`] order
pub fn compare(qubits: usize, shots: usize, seed: u64) -> Result<Vec<ComparisonRun>> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let config = GenerationConfig::new(qubits, shots, seed, algorithm)?;
            let result = Qrng::new(config.clone()).generate();
            Ok(ComparisonRun { config, result })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_compare_runs_all_algorithms() {
        let runs = compare(1, 256, 42).unwrap();
        assert_eq!(runs.len(), Algorithm::ALL.len());
        for (run, algorithm) in runs.iter().zip(Algorithm::ALL) {
            assert_eq!(run.config.algorithm(), algorithm);
            assert_eq!(run.result.bits.len(), 256);
        }
    }

    #[test]
    fn test_compare_rejects_zero_shots() {
        assert!(matches!(compare(1, 0, 42), Err(Error::InvalidConfig(_))));
    }
}
