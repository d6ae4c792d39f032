//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use slugify_types::{Locale, Separator};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Converter options, matching the slugify.yml schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub lower_case: bool,

    #[serde(default)]
    pub separator: Separator,

    #[serde(default)]
    pub transliterate: bool,

    #[serde(default)]
    pub locale: Locale,

    /// Decode HTML character references before anything else
    #[serde(default)]
    pub entities: bool,

    /// Applied in order; a later entry sees the output of earlier ones.
    #[serde(default)]
    pub replacements: Vec<Replacement>,

    #[serde(default)]
    pub stopwords: Vec<String>,

    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(default)]
    pub word_boundary: bool,

    /// With `word_boundary`, stop at the first word that does not fit
    /// instead of skipping it
    #[serde(default)]
    pub save_order: bool,
}

fn default_true() -> bool {
    true
}

/// Literal substring substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl<F: Into<String>, T: Into<String>> From<(F, T)> for Replacement {
    fn from((from, to): (F, T)) -> Self {
        Self::new(from, to)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lower_case: default_true(),
            separator: Separator::default(),
            transliterate: false,
            locale: Locale::root(),
            entities: false,
            replacements: Vec::new(),
            stopwords: Vec::new(),
            max_length: None,
            word_boundary: false,
            save_order: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!("Loaded slugify config from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get a config value using its key (e.g., "locale")
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "lower_case" => Some(self.lower_case.to_string()),
            "separator" => Some(self.separator.as_str().to_string()),
            "transliterate" => Some(self.transliterate.to_string()),
            "locale" => Some(self.locale.to_string()),
            "max_length" => self.max_length.map(|n| n.to_string()),
            "word_boundary" => Some(self.word_boundary.to_string()),
            "save_order" => Some(self.save_order.to_string()),
            "entities" => Some(self.entities.to_string()),
            _ => None,
        }
    }
}
