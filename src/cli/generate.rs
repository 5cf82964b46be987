//! Generate command handler
//!
//! Generates one bit sequence and prints its report.

use crate::cli::{formatter, resolve_algorithm};
use crate::config::Config;
use crate::error::Result;
use crate::format::available_formats;
use crate::qrng::{available_algorithms, GenerationConfig, Qrng};
use clap::Args;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
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

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Number of leading bits to show
    #[arg(long)]
    pub sample: Option<usize>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available algorithms
    #[arg(short = 'A', long = "list-algorithms")]
    pub list_algorithms: bool,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.list_algorithms {
        list_algorithms();
        return Ok(());
    }

    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let algorithm = resolve_algorithm(args.algorithm.as_deref(), &config);
    let generation = GenerationConfig::new(
        args.qubits.unwrap_or(config.defaults.qubits),
        args.shots.unwrap_or(config.defaults.shots),
        args.seed.unwrap_or(config.defaults.seed),
        algorithm,
    )?;
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let sample_bits = args.sample.unwrap_or(config.defaults.sample_bits);

    tracing::info!(
        algorithm = %algorithm,
        qubits = generation.qubit_count(),
        shots = generation.shot_count(),
        "Starting generation"
    );

    let formatter = formatter(&format)?;
    let result = Qrng::new(generation.clone()).generate();
    let output = formatter.format_generation(&generation, &result, sample_bits)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Print available algorithms
fn list_algorithms() {
    println!("Available algorithms:");
    for info in available_algorithms() {
        println!("  {:17} - {}", info.name, info.description);
    }
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
