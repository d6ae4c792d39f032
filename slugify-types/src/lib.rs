//! Shared types for slugify
//!
//! This crate provides the small value types used across the slugify
//! workspace: locale identifiers and the word separator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Invalid language subtag: {0:?}")]
    InvalidLanguage(String),

    #[error("Invalid region subtag: {0:?}")]
    InvalidRegion(String),

    #[error("Unexpected subtag {subtag:?} in locale {tag:?}")]
    UnexpectedSubtag { tag: String, subtag: String },
}

/// Locale identifier: a language with an optional region.
///
/// The root locale has no language and selects Unicode default rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Build a locale from a language subtag, e.g. `"fr"`.
    pub fn new(language: &str) -> Result<Self, LocaleError> {
        Ok(Self {
            language: parse_language(language)?,
            region: None,
        })
    }

    /// Build a locale from language and region subtags, e.g. `("fr", "CA")`.
    pub fn with_region(language: &str, region: &str) -> Result<Self, LocaleError> {
        Ok(Self {
            language: parse_language(language)?,
            region: Some(parse_region(region)?),
        })
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        Self::known("en")
    }

    pub fn french() -> Self {
        Self::known("fr")
    }

    pub fn german() -> Self {
        Self::known("de")
    }

    pub fn turkish() -> Self {
        Self::known("tr")
    }

    fn known(language: &'static str) -> Self {
        Self {
            language: language.to_string(),
            region: None,
        }
    }

    /// Lowercase language subtag, empty for the root locale.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Parses `fr`, `fr-FR`, `fr_FR` or `es-419`. The empty string,
    /// `root` and `und` all parse to the root locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("root") || tag.eq_ignore_ascii_case("und")
        {
            return Ok(Self::root());
        }

        let mut parts = tag.split(['-', '_']);
        let language = parse_language(parts.next().unwrap_or_default())?;
        let region = parts.next().map(parse_region).transpose()?;
        if let Some(extra) = parts.next() {
            return Err(LocaleError::UnexpectedSubtag {
                tag: tag.to_string(),
                subtag: extra.to_string(),
            });
        }

        Ok(Self { language, region })
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

fn parse_language(raw: &str) -> Result<String, LocaleError> {
    let valid = (2..=8).contains(&raw.len()) && raw.chars().all(|c| c.is_ascii_alphabetic());
    if !valid {
        return Err(LocaleError::InvalidLanguage(raw.to_string()));
    }
    Ok(raw.to_ascii_lowercase())
}

fn parse_region(raw: &str) -> Result<String, LocaleError> {
    let alpha = raw.len() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic());
    let numeric = raw.len() == 3 && raw.chars().all(|c| c.is_ascii_digit());
    if !(alpha || numeric) {
        return Err(LocaleError::InvalidRegion(raw.to_string()));
    }
    Ok(raw.to_ascii_uppercase())
}

/// Character placed between words of a slug
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Hyphen,
    Underscore,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Underscore => '_',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Hyphen => "-",
            Separator::Underscore => "_",
        }
    }
}

impl From<Separator> for char {
    fn from(sep: Separator) -> Self {
        sep.as_char()
    }
}
