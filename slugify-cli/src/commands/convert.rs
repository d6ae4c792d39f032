//! Convert command implementation.

use crate::report::{self, ConvertData, ConvertResult};
use anyhow::Result;
use slugify_core::{Locale, Replacement, SlugifyBuilder};
use std::path::Path;

/// Command-line overrides layered on top of the config file
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub underscore: bool,
    pub keep_case: bool,
    pub transliterate: bool,
    pub locale: Option<Locale>,
    pub replacements: Vec<Replacement>,
    pub stopwords: Vec<String>,
    pub max_length: Option<usize>,
    pub word_boundary: bool,
    pub save_order: bool,
    pub entities: bool,
    pub json: bool,
}

impl ConvertOptions {
    /// Flags only ever switch options on; an unset flag keeps the file value.
    fn apply(&self, mut builder: SlugifyBuilder) -> SlugifyBuilder {
        if self.underscore {
            builder = builder.underscore_separator(true);
        }
        if self.keep_case {
            builder = builder.lower_case(false);
        }
        if self.transliterate {
            builder = builder.transliterator(true);
        }
        if let Some(locale) = &self.locale {
            builder = builder.locale(locale.clone());
        }
        if let Some(max) = self.max_length {
            builder = builder.max_length(max);
        }
        if self.word_boundary {
            builder = builder.word_boundary(true);
        }
        if self.save_order {
            builder = builder.save_order(true);
        }
        if self.entities {
            builder = builder.entities(true);
        }
        builder
            .custom_replacements(self.replacements.iter().cloned())
            .stopwords(self.stopwords.iter().cloned())
    }
}

/// Slugify each text and print the results
pub fn convert_texts(
    config_path: Option<&Path>,
    texts: &[String],
    opts: ConvertOptions,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let converter = opts.apply(SlugifyBuilder::from_config(config)).build();

    let results: Vec<ConvertResult> = texts
        .iter()
        .map(|input| ConvertResult {
            input: input.clone(),
            slug: converter.slugify(input.as_str()),
        })
        .collect();

    if opts.json {
        let payload = report::report(
            "slugify.convert",
            ConvertData {
                total: results.len(),
                results,
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for result in &results {
            println!("{}", result.slug);
        }
    }

    Ok(())
}

/// Parse a `FROM=TO` replacement argument
pub fn parse_replacement(raw: &str) -> Result<Replacement, String> {
    match raw.split_once('=') {
        Some((from, _)) if from.is_empty() => Err(format!("empty pattern in '{}'", raw)),
        Some((from, to)) => Ok(Replacement::new(from, to)),
        None => Err(format!("expected FROM=TO, got '{}'", raw)),
    }
}
