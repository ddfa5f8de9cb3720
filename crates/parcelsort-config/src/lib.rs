//! Configuration system for parcelsort.
//!
//! Load the sample catalog and console settings from TOML or YAML files.
//! Classification thresholds are fixed business rules and are not configurable.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use parcelsort_config::SorterConfig;
//! use parcelsort_core::Category;
//!
//! let config = SorterConfig::from_toml_str(r#"
//!     [console]
//!     banner = false
//!
//!     [[samples]]
//!     description = "Flat box"
//!     width = 40
//!     height = 5
//!     length = 30
//!     mass = 1.5
//!     expected = "STANDARD"
//! "#).unwrap();
//!
//! assert!(!config.console.banner);
//! assert_eq!(config.samples.len(), 1);
//! assert_eq!(config.samples[0].expected, Some(Category::Standard));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use parcelsort_config::SorterConfig;
//!
//! let config = SorterConfig::load("parcelsort.toml").unwrap_or_default();
//! // Proceeds with the built-in catalog if the file doesn't exist
//! assert!(!config.samples.is_empty());
//! ```

use std::collections::HashSet;
use std::path::Path;

use parcelsort_core::{Category, Measurement};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main sorter configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SorterConfig {
    /// Console output settings.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Canned packages to classify. Defaults to the built-in catalog.
    #[serde(default = "builtin_samples")]
    pub samples: Vec<SamplePackage>,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            samples: builtin_samples(),
        }
    }
}

impl SorterConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with an empty sample catalog.
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
            ..Self::default()
        }
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks that every sample has a unique, non-blank description.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, sample) in self.samples.iter().enumerate() {
            let description = sample.description.trim();
            if description.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "sample #{} has a blank description",
                    index + 1
                )));
            }
            if !seen.insert(description) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate sample description '{}'",
                    description
                )));
            }
        }
        Ok(())
    }

    /// Adds a sample package.
    pub fn with_sample(mut self, sample: SamplePackage) -> Self {
        self.samples.push(sample);
        self
    }

    /// Enables or disables the startup banner.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.console.banner = banner;
        self
    }

    /// Overrides the log filter directives.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.console.filter = Some(filter.into());
        self
    }
}

/// Console output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConsoleConfig {
    /// Print the banner on startup.
    #[serde(default = "default_banner")]
    pub banner: bool,

    /// `tracing` filter directives, e.g. `"parcelsort=debug"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            filter: None,
        }
    }
}

fn default_banner() -> bool {
    true
}

/// A canned package with an optional expected category.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SamplePackage {
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,

    /// Category the sample should produce, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Category>,
}

impl SamplePackage {
    /// Creates a sample with no expected category.
    pub fn new(description: impl Into<String>, width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            description: description.into(),
            width,
            height,
            length,
            mass,
            expected: None,
        }
    }

    /// Sets the expected category.
    pub fn expecting(mut self, category: Category) -> Self {
        self.expected = Some(category);
        self
    }

    /// Returns the sample's measurement.
    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.width, self.height, self.length, self.mass)
    }
}

/// The built-in sample catalog.
pub fn builtin_samples() -> Vec<SamplePackage> {
    vec![
        SamplePackage::new("Standard Package", 90.0, 90.0, 90.0, 10.0)
            .expecting(Category::Standard),
        SamplePackage::new("Special Package (Bulky)", 200.0, 50.0, 50.0, 15.0)
            .expecting(Category::Special),
        SamplePackage::new("Rejected Package (Both Bulky & Heavy)", 150.0, 150.0, 150.0, 25.0)
            .expecting(Category::Rejected),
    ]
}
