//! JSON output formatter
//!
//! Every document carries a fresh run id and a UTC timestamp.

use crate::entropy::RandomnessTestResult;
use crate::error::Result;
use crate::format::{ComparisonRun, OutputFormatter};
use crate::qrng::{GenerationConfig, GenerationResult, TestReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// JSON formatter - outputs pretty-printed JSON documents
pub struct JsonFormatter;

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    id: Uuid,
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    body: T,
}

impl<T: Serialize> Envelope<T> {
    fn new(body: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            body,
        }
    }
}

#[derive(Serialize)]
struct GenerationDocument<'a> {
    config: &'a GenerationConfig,
    algorithm_name: &'static str,
    report: &'a TestReport,
    sample: String,
}

#[derive(Serialize)]
struct ComparisonEntry<'a> {
    config: &'a GenerationConfig,
    algorithm_name: &'static str,
    report: &'a TestReport,
}

#[derive(Serialize)]
struct ComparisonDocument<'a> {
    runs: Vec<ComparisonEntry<'a>>,
}

#[derive(Serialize)]
struct ValidationDocument<'a> {
    config: &'a GenerationConfig,
    alpha: f64,
    result: &'a RandomnessTestResult,
}

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON report with run id and timestamp"
    }

    fn format_generation(
        &self,
        config: &GenerationConfig,
        result: &GenerationResult,
        sample_bits: usize,
    ) -> Result<String> {
        let document = Envelope::new(GenerationDocument {
            config,
            algorithm_name: config.algorithm().display_name(),
            report: &result.report,
            sample: result.bits.sample(sample_bits),
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_comparison(&self, runs: &[ComparisonRun]) -> Result<String> {
        let document = Envelope::new(ComparisonDocument {
            runs: runs
                .iter()
                .map(|run| ComparisonEntry {
                    config: &run.config,
                    algorithm_name: run.config.algorithm().display_name(),
                    report: &run.result.report,
                })
                .collect(),
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_validation(
        &self,
        config: &GenerationConfig,
        result: &RandomnessTestResult,
        alpha: f64,
    ) -> Result<String> {
        let document = Envelope::new(ValidationDocument {
            config,
            alpha,
            result,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
