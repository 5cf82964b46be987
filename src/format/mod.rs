//! Output formatters
//!
//! Provides trait-based output formatting for generation and validation results.

pub mod json;
pub mod text;

use crate::entropy::RandomnessTestResult;
use crate::error::Result;
use crate::qrng::{GenerationConfig, GenerationResult};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// One algorithm's run in a comparison
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub config: GenerationConfig,
    pub result: GenerationResult,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a single reporting run
    ///
    /// # Arguments
    /// * `config` - The configuration the bits were generated with
    /// * `result` - Bits plus their report
    /// * `sample_bits` - How many leading bits to show
    fn format_generation(
        &self,
        config: &GenerationConfig,
        result: &GenerationResult,
        sample_bits: usize,
    ) -> Result<String>;

    /// Format a side-by-side run of several algorithms
    fn format_comparison(&self, runs: &[ComparisonRun]) -> Result<String>;

    /// Format a validating tester run
    fn format_validation(
        &self,
        config: &GenerationConfig,
        result: &RandomnessTestResult,
        alpha: f64,
    ) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        &json::JsonFormatter as &dyn OutputFormatter,
        &text::TextFormatter,
    ]
    .iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
        assert!(get_formatter("unknown").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        for info in &formats {
            let formatter = get_formatter(&info.name).unwrap();
            assert_eq!(formatter.description(), info.description);
        }
    }
}
