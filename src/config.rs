//! Configuration for Rollcall
//!
//! Centralized configuration with sensible defaults. Values can come from
//! the builder, from an optional TOML file, or both (builder wins).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RecordError, Result};

/// Main configuration for a Rollcall session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Capacity reserved on the first insert; doubled whenever it fills up
    pub initial_capacity: usize,

    /// Halve capacity when a removal leaves the store under a quarter full
    pub shrink_on_remove: bool,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Names longer than this many characters trigger a warning (never truncated)
    pub name_length_hint: usize,

    /// Prompt printed before each command
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 10,
            shrink_on_remove: true,
            name_length_hint: 99,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| RecordError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            RecordError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject settings the store cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(RecordError::Config(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an existing config (e.g. one read from a file)
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the capacity reserved on the first insert
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Enable or disable shrinking after removals
    pub fn shrink_on_remove(mut self, enabled: bool) -> Self {
        self.config.shrink_on_remove = enabled;
        self
    }

    /// Set the soft name length hint
    pub fn name_length_hint(mut self, chars: usize) -> Self {
        self.config.name_length_hint = chars;
        self
    }

    /// Set the shell prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
