//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod compare;
pub mod config;
pub mod generate;
pub mod validate;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{get_formatter, OutputFormatter};
use crate::qrng::Algorithm;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Simulated quantum random bit generator
#[derive(Parser)]
#[command(name = "qrng-sim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate bits and print their report
    Generate(generate::GenerateArgs),

    /// Run every algorithm with the same parameters
    Compare(compare::CompareArgs),

    /// Generate bits and gate them through the validating tester
    Validate(validate::ValidateArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Compare(args) => compare::run(args),
        Commands::Validate(args) => validate::run(args),
        Commands::Config(args) => config::run(args),
    }
}

/// Log to stderr, `warn` unless RUST_LOG says otherwise
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve an algorithm name, falling back to the configured default
///
/// Unknown names are not fatal: the caller gets the default and a warning.
pub(crate) fn resolve_algorithm(requested: Option<&str>, config: &Config) -> Algorithm {
    let fallback = || match config.defaults.algorithm.parse::<Algorithm>() {
        Ok(algorithm) => algorithm,
        Err(_) => {
            tracing::warn!(
                algorithm = %config.defaults.algorithm,
                "Configured default algorithm is unknown, using {}",
                Algorithm::default()
            );
            Algorithm::default()
        }
    };

    match requested {
        None => fallback(),
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(_) => {
                let algorithm = fallback();
                tracing::warn!(requested = name, fallback = %algorithm, "Unknown algorithm");
                eprintln!("Unknown algorithm '{}', using {}", name, algorithm);
                algorithm
            }
        },
    }
}

/// Look up a formatter, failing on unknown names
pub(crate) fn formatter(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| Error::Config(format!("Unknown format: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_algorithm() {
        let mut config = Config::default();
        assert_eq!(resolve_algorithm(Some("PCG"), &config), Algorithm::Pcg);
        assert_eq!(resolve_algorithm(None, &config), Algorithm::MersenneTwister);

        config.defaults.algorithm = "XOSHIRO".to_string();
        assert_eq!(resolve_algorithm(Some("bogus"), &config), Algorithm::Xoshiro);

        config.defaults.algorithm = "bogus".to_string();
        assert_eq!(resolve_algorithm(None, &config), Algorithm::MersenneTwister);
    }

    #[test]
    fn test_parse_compare_positionals() {
        let cli = Cli::try_parse_from(["qrng-sim", "compare", "2", "64"]).unwrap();
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.qubits, Some(2));
                assert_eq!(args.shots, Some(64));
                assert_eq!(args.seed, None);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_parse_validate_tests_list() {
        let cli = Cli::try_parse_from([
            "qrng-sim",
            "validate",
            "--tests",
            "runs,block_frequency",
            "--alpha",
            "0.05",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.tests, vec!["runs".to_string(), "block_frequency".to_string()]);
                assert_eq!(args.alpha, Some(0.05));
            }
            _ => panic!("expected validate"),
        }
    }

    #[test]
    fn test_formatter_lookup() {
        assert!(formatter("json").is_ok());
        assert!(matches!(formatter("gpx"), Err(Error::Config(_))));
    }
}
