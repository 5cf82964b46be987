//! Configuration management
//!
//! Loads and saves CLI defaults from XDG-compliant paths.
//! Config location: ~/.config/qrng-sim/config.toml

pub mod defaults;

use crate::entropy::{TestKind, TesterConfig};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default values for generation
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Validating tester settings
    #[serde(default)]
    pub tester: TesterSettings,
}

/// Default values for generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default number of qubits
    #[serde(default = "default_qubits")]
    pub qubits: usize,

    /// Default number of shots
    #[serde(default = "default_shots")]
    pub shots: usize,

    /// Default seed (0 = time-based)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Default algorithm identifier
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,

    /// Number of leading bits shown in text output
    #[serde(default = "default_sample_bits")]
    pub sample_bits: usize,
}

/// Validating tester settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesterSettings {
    /// Significance level
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Block length for the block frequency test
    #[serde(default = "default_block_size")]
    pub block_size: usize,

    /// Template length for the non-overlapping template test
    #[serde(default = "default_template_length")]
    pub template_length: usize,

    /// Selected test names
    #[serde(default = "default_tests")]
    pub tests: Vec<String>,
}

// Default value functions for serde
fn default_qubits() -> usize {
    DEFAULT_QUBITS
}
fn default_shots() -> usize {
    DEFAULT_SHOTS
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_sample_bits() -> usize {
    DEFAULT_SAMPLE_BITS
}
fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}
fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}
fn default_template_length() -> usize {
    DEFAULT_TEMPLATE_LENGTH
}
fn default_tests() -> Vec<String> {
    DEFAULT_TESTS.iter().map(|s| s.to_string()).collect()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            qubits: default_qubits(),
            shots: default_shots(),
            seed: default_seed(),
            algorithm: default_algorithm(),
            format: default_format(),
            sample_bits: default_sample_bits(),
        }
    }
}

impl Default for TesterSettings {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            block_size: default_block_size(),
            template_length: default_template_length(),
            tests: default_tests(),
        }
    }
}

impl TesterSettings {
    /// Convert to a tester configuration, parsing the test names
    ///
    /// Range checks happen later, in `RandomnessTester::new`.
    pub fn to_tester_config(&self) -> Result<TesterConfig> {
        let tests = self
            .tests
            .iter()
            .map(|name| name.parse::<TestKind>().map_err(Error::Config))
            .collect::<Result<Vec<_>>>()?;

        Ok(TesterConfig {
            alpha: self.alpha,
            block_size: self.block_size,
            template_length: self.template_length,
            tests,
        })
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!(path = %path.display(), "Wrote default config");
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "qubits"] => Some(self.defaults.qubits.to_string()),
            ["defaults", "shots"] => Some(self.defaults.shots.to_string()),
            ["defaults", "seed"] => Some(self.defaults.seed.to_string()),
            ["defaults", "algorithm"] => Some(self.defaults.algorithm.clone()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "sample_bits"] => Some(self.defaults.sample_bits.to_string()),

            ["tester", "alpha"] => Some(self.tester.alpha.to_string()),
            ["tester", "block_size"] => Some(self.tester.block_size.to_string()),
            ["tester", "template_length"] => Some(self.tester.template_length.to_string()),
            ["tester", "tests"] => Some(self.tester.tests.join(",")),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "qubits"] => {
                self.defaults.qubits = parse_value(value, "qubits")?;
            }
            ["defaults", "shots"] => {
                self.defaults.shots = parse_value(value, "shots")?;
            }
            ["defaults", "seed"] => {
                self.defaults.seed = parse_value(value, "seed")?;
            }
            ["defaults", "algorithm"] => {
                value
                    .parse::<crate::qrng::Algorithm>()
                    .map_err(Error::Config)?;
                self.defaults.algorithm = value.to_string();
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }
            ["defaults", "sample_bits"] => {
                self.defaults.sample_bits = parse_value(value, "sample_bits")?;
            }

            ["tester", "alpha"] => {
                self.tester.alpha = parse_value(value, "alpha")?;
            }
            ["tester", "block_size"] => {
                self.tester.block_size = parse_value(value, "block_size")?;
            }
            ["tester", "template_length"] => {
                self.tester.template_length = parse_value(value, "template_length")?;
            }
            ["tester", "tests"] => {
                let tests: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                for name in &tests {
                    name.parse::<TestKind>().map_err(Error::Config)?;
                }
                self.tester.tests = tests;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.qubits",
            "defaults.shots",
            "defaults.seed",
            "defaults.algorithm",
            "defaults.format",
            "defaults.sample_bits",
            "tester.alpha",
            "tester.block_size",
            "tester.template_length",
            "tester.tests",
        ]
    }
}

fn parse_value<T: std::str::FromStr>(value: &str, name: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {} value: {}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.defaults.qubits, 1);
        assert_eq!(config.defaults.shots, 1000);
        assert_eq!(config.defaults.seed, 42);
        assert_eq!(config.defaults.algorithm, "MERSENNE_TWISTER");
        assert_eq!(config.tester.alpha, 0.01);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.algorithm"), Some("MERSENNE_TWISTER".to_string()));

        config.set("defaults.algorithm", "PCG").unwrap();
        assert_eq!(config.get("defaults.algorithm"), Some("PCG".to_string()));

        config.set("defaults.shots", "5000").unwrap();
        assert_eq!(config.get("defaults.shots"), Some("5000".to_string()));
        assert_eq!(config.defaults.shots, 5000);

        config.set("tester.tests", "runs, block_frequency").unwrap();
        assert_eq!(config.get("tester.tests"), Some("runs,block_frequency".to_string()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("defaults.shots", "not_a_number").is_err());
        assert!(config.set("defaults.algorithm", "pcg").is_err());
        assert!(config.set("tester.tests", "runs,spectral").is_err());
        assert_eq!(config.defaults.algorithm, "MERSENNE_TWISTER");
    }

    #[test]
    fn test_tester_config_conversion() {
        let settings = TesterSettings {
            alpha: 0.05,
            tests: vec!["frequency".to_string(), "template".to_string()],
            ..TesterSettings::default()
        };
        let tester = settings.to_tester_config().unwrap();
        assert_eq!(tester.alpha, 0.05);
        assert_eq!(
            tester.tests,
            vec![TestKind::Frequency, TestKind::NonOverlappingTemplate]
        );

        let bad = TesterSettings {
            tests: vec!["nope".to_string()],
            ..TesterSettings::default()
        };
        assert!(matches!(bad.to_tester_config(), Err(Error::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.defaults.algorithm = "XOSHIRO".to_string();
        config.tester.alpha = 0.05;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.algorithm, "XOSHIRO");
        assert_eq!(loaded.tester.alpha, 0.05);
    }

    #[test]
    fn test_load_missing_writes_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.defaults.shots, DEFAULT_SHOTS);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[defaults]\nshots = 64\n").unwrap();
        assert_eq!(config.defaults.shots, 64);
        assert_eq!(config.defaults.qubits, DEFAULT_QUBITS);
        assert_eq!(config.tester.block_size, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[tester]"));
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"defaults.algorithm"));
        assert!(keys.contains(&"tester.alpha"));
        let config = Config::default();
        for key in keys {
            assert!(config.get(key).is_some(), "{} has no getter", key);
        }
    }
}
