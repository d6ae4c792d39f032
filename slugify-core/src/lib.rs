//! # slugify-core
//!
//! Core library for slugify.
//!
//! This crate turns arbitrary text into URL-safe slugs. A [`Slugify`]
//! converter is configured once (fluently through [`SlugifyBuilder`] or from
//! a slugify.yml [`Config`]) and then maps each input string to a slug of
//! ASCII letters and digits joined by `-` or `_`.

pub mod config;
pub mod locale;
pub mod pipeline;
pub mod slug;
pub mod transliterate;

pub use config::{Config, ConfigError, Replacement};
pub use slug::{is_slug, normalize_slug, slugify, Slugify, SlugifyBuilder};
pub use slugify_types::{Locale, LocaleError, Separator};
