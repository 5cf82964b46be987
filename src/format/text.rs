//! Human-readable text output formatter

use crate::entropy::RandomnessTestResult;
use crate::error::Result;
use crate::format::{ComparisonRun, OutputFormatter};
use crate::qrng::{GenerationConfig, GenerationResult};
use std::fmt::Write;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

fn pass_label(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

fn push_header(output: &mut String, title: &str, config: &GenerationConfig) {
    let _ = writeln!(output, "qrng-sim {} ({})", title, config.algorithm().display_name());
    let _ = writeln!(output, "Qubits: {}", config.qubit_count());
    let _ = writeln!(output, "Shots: {}", config.shot_count());
    if config.seed() == 0 {
        let _ = writeln!(output, "Seed: 0 (time-based)");
    } else {
        let _ = writeln!(output, "Seed: {}", config.seed());
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_generation(
        &self,
        config: &GenerationConfig,
        result: &GenerationResult,
        sample_bits: usize,
    ) -> Result<String> {
        let report = &result.report;
        let mut output = String::new();

        push_header(&mut output, "generation", config);
        let _ = writeln!(
            output,
            "Generation time: {:.3} ms\n",
            report.generation_time.as_secs_f64() * 1000.0
        );

        if let Some(error) = &report.error {
            let _ = writeln!(output, "Generation failed: {}", error);
            return Ok(output);
        }

        let _ = writeln!(output, "Counts ({} bits):", report.total_bits());
        let _ = writeln!(output, "  Ones:  {} ({:.2}%)", report.ones, report.ones_percent());
        let _ = writeln!(output, "  Zeros: {} ({:.2}%)\n", report.zeros, report.zeros_percent());

        output.push_str("Statistics:\n");
        let _ = writeln!(output, "  Frequency p-value:  {:.4}", report.frequency_pvalue);
        let _ = writeln!(output, "  Runs p-value:       {:.4}", report.runs_pvalue);
        let _ = writeln!(output, "  Chi-square p-value: {:.4}", report.chi_square_pvalue);
        let _ = writeln!(output, "  Shannon entropy:    {:.4}", report.shannon_entropy);
        let _ = writeln!(output, "  Min-entropy:        {:.4}", report.min_entropy);
        let _ = writeln!(
            output,
            "  All tests passed:   {}",
            if report.all_tests_passed { "yes" } else { "no" }
        );

        if sample_bits > 0 {
            let shown = sample_bits.min(result.bits.len());
            let _ = writeln!(
                output,
                "\nSample (first {} bits): {}",
                shown,
                result.bits.sample(shown)
            );
        }

        Ok(output)
    }

    fn format_comparison(&self, runs: &[ComparisonRun]) -> Result<String> {
        let mut output = String::new();

        if let Some(first) = runs.first() {
            let _ = writeln!(
                output,
                "qrng-sim comparison: {} qubits x {} shots, seed {}\n",
                first.config.qubit_count(),
                first.config.shot_count(),
                first.config.seed()
            );
        }

        let _ = writeln!(
            output,
            "{:<18} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>10}",
            "Algorithm", "Ones", "Zeros", "Freq p", "Runs p", "Chi2 p", "Shannon", "Min-H", "Time (ms)"
        );

        for run in runs {
            let report = &run.result.report;
            let name = run.config.algorithm().display_name();
            if let Some(error) = &report.error {
                let _ = writeln!(output, "{:<18} failed: {}", name, error);
                continue;
            }
            let _ = writeln!(
                output,
                "{:<18} {:>8} {:>8} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>10.3}",
                name,
                report.ones,
                report.zeros,
                report.frequency_pvalue,
                report.runs_pvalue,
                report.chi_square_pvalue,
                report.shannon_entropy,
                report.min_entropy,
                report.generation_time.as_secs_f64() * 1000.0
            );
        }

        Ok(output)
    }

    fn format_validation(
        &self,
        config: &GenerationConfig,
        result: &RandomnessTestResult,
        alpha: f64,
    ) -> Result<String> {
        let mut output = String::new();

        push_header(&mut output, "validation", config);
        let _ = writeln!(output, "Bits analyzed: {}", result.bits_analyzed);
        let _ = writeln!(output, "Significance level: {}\n", alpha);

        output.push_str("Tests:\n");
        for outcome in &result.outcomes {
            let _ = writeln!(
                output,
                "  {:<26} p = {:.4}  {}",
                outcome.kind.name(),
                outcome.p_value,
                pass_label(outcome.passed)
            );
        }

        let _ = writeln!(output, "\nShannon entropy: {:.4}", result.shannon_entropy);
        let _ = writeln!(output, "Min-entropy:     {:.4}", result.min_entropy);
        let _ = writeln!(output, "Result: {}", pass_label(result.all_passed));

        Ok(output)
    }
}
