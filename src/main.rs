//! qrng-sim CLI entry point
//!
//! Simulated quantum random bit generator with statistical tests

use qrng_sim::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
