//! Word splitting, filtering and truncation stages.
//!
//! These run after the text has been folded, so every word they see is made
//! of ASCII letters and digits only.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid regex"));

/// Split `text` into words, dropping every run of non-word characters.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    NON_WORD.split(text).filter(|word| !word.is_empty())
}

/// Decode HTML character references: named (`&copy;`), decimal (`&#169;`)
/// and hex (`&#xA9;`). Malformed references are left as written.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    html_escape::decode_html_entities(text)
}

/// Apply literal replacements in order. Empty patterns are skipped.
pub fn replace_all<'a, I>(text: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    replacements
        .into_iter()
        .filter(|(from, _)| !from.is_empty())
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Cut a joined slug down to `max_length` bytes.
///
/// With `word_boundary` only whole words are kept. A word that does not fit
/// is skipped and later, shorter words may still be taken; `save_order`
/// stops at the first word that does not fit instead. If no whole word fits,
/// the slug is hard-cut.
pub fn truncate(
    slug: &str,
    max_length: usize,
    word_boundary: bool,
    save_order: bool,
    separator: char,
) -> String {
    if slug.len() <= max_length {
        return slug.to_string();
    }

    if word_boundary {
        let mut kept = String::with_capacity(max_length);
        for word in slug.split(separator) {
            let needed = if kept.is_empty() {
                word.len()
            } else {
                kept.len() + 1 + word.len()
            };
            if needed <= max_length {
                if !kept.is_empty() {
                    kept.push(separator);
                }
                kept.push_str(word);
            } else if save_order {
                break;
            }
        }
        if !kept.is_empty() {
            return kept;
        }
    }

    slug[..max_length].trim_matches(separator).to_string()
}
