//! Configuration for GeneQuery
//!
//! Centralized configuration with sensible defaults. Can be built in code or
//! read from a TOML file; every field is optional in the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GeneError, Result};

/// Main configuration for a batch run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Tab-separated table: protein, organism, rle-encoded sequence
    pub sequences_path: PathBuf,

    /// Tab-separated command script
    pub commands_path: PathBuf,

    // -------------------------------------------------------------------------
    // Report Configuration
    // -------------------------------------------------------------------------
    /// Report file, overwritten on each run
    pub output_path: PathBuf,

    /// First header line, omitted when unset
    pub author: Option<String>,

    /// Second header line
    pub title: String,

    /// Width of the `-` separator line between blocks
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequences_path: PathBuf::from("sequences.0.txt"),
            commands_path: PathBuf::from("commands.0.txt"),
            output_path: PathBuf::from("genedata.0.txt"),
            author: None,
            title: "Genetic Searching".to_string(),
            separator_width: 89,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| GeneError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            GeneError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check values that would produce a broken report
    pub fn validate(&self) -> Result<()> {
        if self.separator_width == 0 {
            return Err(GeneError::Config(
                "separator_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The line written after the header and after every block
    pub fn separator(&self) -> String {
        "-".repeat(self.separator_width)
    }

    /// Start a builder from this config, for layering CLI overrides
    pub fn into_builder(self) -> ConfigBuilder {
        ConfigBuilder { config: self }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the sequence table path
    pub fn sequences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.sequences_path = path.into();
        self
    }

    /// Set the command script path
    pub fn commands_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.commands_path = path.into();
        self
    }

    /// Set the report output path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the author header line
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.config.author = Some(author.into());
        self
    }

    /// Set the title header line
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the separator width (in characters)
    pub fn separator_width(mut self, width: usize) -> Self {
        self.config.separator_width = width;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
