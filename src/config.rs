//! YAML Configuration File Support for langrv
//!
//! A single YAML file describes the vector space (order, dimension, seed,
//! boundary default) and the slice of a corpus used for training. Two
//! deployments loading the same file build mutually comparable vectors.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # langrv configuration
//! version: "1.0"
//! name: "bible-6-languages"
//!
//! space:
//!   version: 1
//!   order: 4
//!   dimension: 10000
//!   seed: 42
//!   add_boundary_space: true
//!
//! training:
//!   skip_lines: 0
//!   max_lines: 1000
//! ```

use std::fs;
use std::path::Path;

use langvec::{Builder, SpaceConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::training::TrainingWindow;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct LangrvConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Vector space parameters
    #[serde(default)]
    pub space: SpaceYamlConfig,

    /// Which corpus lines feed a language vector
    #[serde(default)]
    pub training: TrainingYamlConfig,
}

impl LangrvConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LangrvConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration back to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Construct the builder described by the `space` section
    pub fn builder(&self) -> Result<Builder, ConfigLoadError> {
        Builder::new(self.space_config())
            .map_err(|err| ConfigLoadError::Validation(format!("space: {err}")))
    }

    pub fn space_config(&self) -> SpaceConfig {
        SpaceConfig::from(&self.space)
    }

    pub fn training_window(&self) -> TrainingWindow {
        TrainingWindow::from(&self.training)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.space.validate()?;
        self.training.validate()?;

        Ok(())
    }
}

impl Default for LangrvConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            space: SpaceYamlConfig::default(),
            training: TrainingYamlConfig::default(),
        }
    }
}

/// Vector space YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_order")]
    pub order: usize,

    #[serde(default = "default_dimension")]
    pub dimension: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "true_value")]
    pub add_boundary_space: bool,
}

impl SpaceYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "space.version must be >= 1".to_string(),
            ));
        }
        if self.dimension == 0 {
            return Err(ConfigLoadError::Validation(
                "space.dimension must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SpaceYamlConfig {
    fn default() -> Self {
        let space = SpaceConfig::default();
        Self {
            version: space.version,
            order: space.order,
            dimension: space.dimension,
            seed: space.seed,
            add_boundary_space: space.add_boundary_space,
        }
    }
}

impl From<&SpaceYamlConfig> for SpaceConfig {
    fn from(yaml: &SpaceYamlConfig) -> Self {
        SpaceConfig {
            version: yaml.version,
            order: yaml.order,
            dimension: yaml.dimension,
            seed: yaml.seed,
            add_boundary_space: yaml.add_boundary_space,
        }
    }
}

/// Training corpus YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingYamlConfig {
    /// Lines to skip before the first training line
    #[serde(default)]
    pub skip_lines: usize,

    /// Maximum number of training lines; unlimited when absent
    #[serde(default)]
    pub max_lines: Option<usize>,
}

impl TrainingYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.max_lines == Some(0) {
            return Err(ConfigLoadError::Validation(
                "training.max_lines must be >= 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&TrainingYamlConfig> for TrainingWindow {
    fn from(yaml: &TrainingYamlConfig) -> Self {
        TrainingWindow {
            skip_lines: yaml.skip_lines,
            max_lines: yaml.max_lines,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_order() -> usize {
    3
}
fn default_dimension() -> usize {
    10_000
}
fn default_seed() -> u64 {
    42
}
fn true_value() -> bool {
    true
}
