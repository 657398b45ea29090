//! Configuration for the sentence generator

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a generator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunable grammar rules
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chance that an entry with a random prefix mode gets a prefix
    pub prefix_probability: f64,

    /// Leading characters that turn "le"/"la" into "l'" and "de" into "d'"
    pub elision_chars: String,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
struct TomlConfig {
    generator: Option<GeneratorConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix_probability: 0.2,
            elision_chars: "aeiouyéh".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Settings live under a `[generator]` table; missing keys keep their defaults.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let config = parsed.generator.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Set the prefix probability, clamped to `[0, 1]`
    pub fn with_prefix_probability(mut self, probability: f64) -> Self {
        self.prefix_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the elision class
    pub fn with_elision_chars(mut self, chars: impl Into<String>) -> Self {
        self.elision_chars = chars.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.prefix_probability) {
            return Err(ConfigError::Invalid(format!(
                "prefix_probability must be between 0 and 1, got {}",
                self.prefix_probability
            )));
        }
        Ok(())
    }
}
