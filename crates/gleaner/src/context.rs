//! Configuration for extraction and literal evaluation

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::vowels::{VowelSet, VOWELS};

/// Settings shared by the library entry points and the CLI.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Characters treated as vowels
    pub vowels: String,

    /// Match vowels regardless of case
    pub ignore_case: bool,

    /// Largest range a collection literal may expand to
    pub max_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vowels: VOWELS.to_string(),
            ignore_case: false,
            max_items: 1_000_000,
        }
    }
}

impl Config {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom range expansion limit.
    pub fn with_max_items(max_items: usize) -> Self {
        Self {
            max_items,
            ..Default::default()
        }
    }

    /// Replace the vowel set.
    pub fn vowels(mut self, vowels: impl Into<String>) -> Self {
        self.vowels = vowels.into();
        self
    }

    /// Toggle case-insensitive matching.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Build the vowel set described by this config.
    pub fn vowel_set(&self) -> Result<VowelSet, ConfigError> {
        let set = VowelSet::from_chars(&self.vowels)?;
        Ok(if self.ignore_case {
            set.case_insensitive()
        } else {
            set
        })
    }
}
