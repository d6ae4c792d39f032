//! Slug generation and normalization.

use crate::config::{Config, Replacement};
use crate::locale::{expand_digraphs, fold_case};
use crate::pipeline;
use crate::transliterate::{ascii_fold, transliterate};
use once_cell::sync::Lazy;
use regex::Regex;
use slugify_types::{Locale, Separator};
use std::borrow::Cow;

static DEFAULT: Lazy<Slugify> = Lazy::new(Slugify::default);

static SLUG_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(?:[-_][A-Za-z0-9]+)*$").expect("Invalid regex"));

/// Configured slug converter
///
/// Built once through [`Slugify::builder`] (or from a [`Config`]) and
/// immutable afterwards. Conversions never fail: every input maps to a
/// slug, possibly the empty string.
///
/// # Examples
///
/// ```
/// use slugify_core::Slugify;
///
/// let slugify = Slugify::builder().underscore_separator(true).build();
/// assert_eq!(slugify.slugify("Hello World"), "hello_world");
/// assert_eq!(slugify.slugify(None), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slugify {
    config: Config,
}

impl Slugify {
    pub fn new(config: Config) -> Self {
        tracing::debug!(
            locale = %config.locale,
            separator = config.separator.as_str(),
            transliterate = config.transliterate,
            replacements = config.replacements.len(),
            "Built slug converter"
        );
        Self { config }
    }

    pub fn builder() -> SlugifyBuilder {
        SlugifyBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert `text` to a slug. `None` and `""` both give `""`.
    pub fn slugify<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return String::new(),
        };
        let config = &self.config;

        let decoded = if config.entities {
            pipeline::decode_entities(text)
        } else {
            Cow::Borrowed(text)
        };
        let replaced = pipeline::replace_all(
            &decoded,
            config
                .replacements
                .iter()
                .map(|r| (r.from.as_str(), r.to.as_str())),
        );
        let mut folded = expand_digraphs(&replaced, &config.locale);
        if config.transliterate {
            folded = transliterate(&folded);
        }
        if config.lower_case {
            folded = fold_case(&folded, &config.locale);
        }
        let mut folded = ascii_fold(&folded, config.transliterate);
        if config.lower_case {
            // compatibility decomposition can surface capitals (ℌ becomes H)
            folded.make_ascii_lowercase();
        }

        let separator = config.separator.as_str();
        let slug = pipeline::words(&folded)
            .filter(|word| !self.is_stopword(word))
            .collect::<Vec<_>>()
            .join(separator);

        let slug = match config.max_length {
            Some(max) => pipeline::truncate(
                &slug,
                max,
                config.word_boundary,
                config.save_order,
                config.separator.as_char(),
            ),
            None => slug,
        };

        tracing::trace!(input = text, slug = %slug, "slugified");
        slug
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.config
            .stopwords
            .iter()
            .any(|stop| stop.eq_ignore_ascii_case(word))
    }
}

/// Fluent builder for [`Slugify`]
#[derive(Debug, Clone, Default)]
pub struct SlugifyBuilder {
    config: Config,
}

impl SlugifyBuilder {
    /// Start from an existing configuration, e.g. one loaded from slugify.yml
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn lower_case(mut self, enabled: bool) -> Self {
        self.config.lower_case = enabled;
        self
    }

    /// Use `_` instead of `-` between words
    pub fn underscore_separator(mut self, enabled: bool) -> Self {
        self.config.separator = if enabled {
            Separator::Underscore
        } else {
            Separator::Hyphen
        };
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.config.separator = separator;
        self
    }

    pub fn transliterator(mut self, enabled: bool) -> Self {
        self.config.transliterate = enabled;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Append a literal replacement. Replacements run in the order added.
    pub fn custom_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.config.replacements.push(Replacement::new(from, to));
        self
    }

    pub fn custom_replacements<I, R>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Replacement>,
    {
        self.config
            .replacements
            .extend(replacements.into_iter().map(Into::into));
        self
    }

    pub fn stopword(mut self, word: impl Into<String>) -> Self {
        self.config.stopwords.push(word.into());
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = Some(max_length);
        self
    }

    /// Only truncate between words
    pub fn word_boundary(mut self, enabled: bool) -> Self {
        self.config.word_boundary = enabled;
        self
    }

    /// Stop at the first word that does not fit rather than skipping it
    pub fn save_order(mut self, enabled: bool) -> Self {
        self.config.save_order = enabled;
        self
    }

    /// Decode HTML character references (`&amp;`, `&#169;`) before replacements
    pub fn entities(mut self, enabled: bool) -> Self {
        self.config.entities = enabled;
        self
    }

    pub fn build(self) -> Slugify {
        Slugify::new(self.config)
    }
}

/// Convert a string to a URL-safe slug using the default options
///
/// Rules:
/// - Lowercase
/// - Strip diacritics
/// - Replace runs of anything but ASCII letters and digits with one hyphen
/// - Trim leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use slugify_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// assert_eq!(slugify("C++ Programming"), "c-programming");
/// ```
pub fn slugify(input: &str) -> String {
    DEFAULT.slugify(input)
}

/// Normalize a slug (ensure it's properly formatted)
pub fn normalize_slug(slug: &str) -> String {
    slugify(slug)
}

/// Whether `value` already has slug shape: ASCII words joined by single `-` or `_`.
pub fn is_slug(value: &str) -> bool {
    SLUG_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default() -> Slugify {
        Slugify::builder().build()
    }

    #[test]
    fn test_null_and_empty() {
        assert_eq!(default().slugify(None), "");
        assert_eq!(default().slugify(""), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(default().slugify("   "), "");
        assert_eq!(default().slugify("\t\n "), "");
    }

    #[test]
    fn test_basic_slugify() {
        assert_eq!(default().slugify("Hello World"), "hello-world");
        assert_eq!(default().slugify("test"), "test");
    }

    #[test]
    fn test_underscore_separator() {
        let s = Slugify::builder().underscore_separator(true).build();
        assert_eq!(s.slugify("Hello World"), "hello_world");
        assert_eq!(s.slugify("hello-world"), "hello_world");
    }

    #[test]
    fn test_keeps_case() {
        let s = Slugify::builder().lower_case(false).build();
        assert_eq!(s.slugify("Hello World"), "Hello-World");
        assert_eq!(s.slugify("MiXeD cAsE"), "MiXeD-cAsE");
    }

    #[test]
    fn test_collapses_non_word_runs() {
        assert_eq!(default().slugify("Hello!!!   World"), "hello-world");
        assert_eq!(default().slugify("Hello@World!"), "hello-world");
        assert_eq!(default().slugify("a - _ . b"), "a-b");
    }

    #[test]
    fn test_trims_separators() {
        assert_eq!(default().slugify("!!!Hello World???"), "hello-world");
        assert_eq!(default().slugify("-Leading Hyphen"), "leading-hyphen");
        assert_eq!(default().slugify("Trailing Hyphen-"), "trailing-hyphen");
    }

    #[test]
    fn test_numbers_remain() {
        assert_eq!(default().slugify("123 456"), "123-456");
        assert_eq!(default().slugify("100% guaranteed"), "100-guaranteed");
    }

    #[test]
    fn test_symbols_removed() {
        assert_eq!(default().slugify("®©✓"), "");
        assert_eq!(default().slugify("!!!"), "");
    }

    #[test]
    fn test_custom_replacement() {
        let s = Slugify::builder().custom_replacement("hello", "hi").build();
        assert_eq!(s.slugify("hello world"), "hi-world");
    }

    #[test]
    fn test_custom_replacements_chain_in_order() {
        let s = Slugify::builder()
            .custom_replacement("&", " and ")
            .custom_replacement("and", "n")
            .build();
        assert_eq!(s.slugify("rock&roll"), "rock-n-roll");

        let reversed = Slugify::builder()
            .custom_replacements([("and", "n"), ("&", " and ")])
            .build();
        assert_eq!(reversed.slugify("rock&roll"), "rock-and-roll");
    }

    #[test]
    fn test_replacements_are_literal() {
        let s = Slugify::builder().custom_replacement(".*", "x").build();
        assert_eq!(s.slugify("a.*b"), "axb");
        assert_eq!(s.slugify("ab"), "ab");
    }

    #[test]
    fn test_replacements_run_before_lowercase() {
        let s = Slugify::builder().custom_replacement("Hello", "hi").build();
        assert_eq!(s.slugify("Hello hello"), "hi-hello");
    }

    #[test]
    fn test_diacritics_stripped_without_transliteration() {
        let s = Slugify::builder().locale(Locale::french()).build();
        assert_eq!(s.slugify("Côte d'Ivoire"), "cote-d-ivoire");
        assert_eq!(default().slugify("Café & Restaurant"), "cafe-restaurant");
    }

    #[test]
    fn test_french_with_transliteration() {
        let s = Slugify::builder()
            .locale(Locale::french())
            .transliterator(true)
            .build();
        assert_eq!(s.slugify("Côte d'Ivoire"), "cote-d-ivoire");
    }

    #[test]
    fn test_transliterates_non_latin() {
        let s = Slugify::builder().transliterator(true).build();
        assert_eq!(s.slugify("Тест"), "test");
        assert_eq!(default().slugify("Тест"), "");
    }

    #[test]
    fn test_combined_options() {
        let s = Slugify::builder()
            .lower_case(false)
            .underscore_separator(true)
            .transliterator(true)
            .build();
        assert_eq!(s.slugify("Tëst Šlug"), "Test_Slug");
    }

    #[test]
    fn test_german_locale() {
        let s = Slugify::builder().locale(Locale::german()).build();
        assert_eq!(s.slugify("Straße über"), "strasse-ueber");

        let kept = Slugify::builder()
            .locale(Locale::german())
            .lower_case(false)
            .build();
        assert_eq!(kept.slugify("Äpfel"), "Aepfel");
    }

    #[test]
    fn test_eszett_without_locale() {
        assert_eq!(default().slugify("Straße"), "stra-e");
        let s = Slugify::builder().transliterator(true).build();
        assert_eq!(s.slugify("Straße"), "strasse");
    }

    #[test]
    fn test_turkish_case_folding() {
        let tr = Slugify::builder().locale(Locale::turkish()).build();
        assert_eq!(tr.slugify("ISPARTA"), "sparta");
        assert_eq!(tr.slugify("İzmir"), "izmir");

        let tr_translit = Slugify::builder()
            .locale(Locale::turkish())
            .transliterator(true)
            .build();
        assert_eq!(tr_translit.slugify("ISPARTA"), "isparta");

        assert_eq!(default().slugify("ISPARTA"), "isparta");
        assert_eq!(default().slugify("İstanbul"), "istanbul");
    }

    #[test]
    fn test_compatibility_capitals_are_lowercased() {
        assert_eq!(default().slugify("\u{210C}ello"), "hello");
        let kept = Slugify::builder().lower_case(false).build();
        assert_eq!(kept.slugify("\u{210C}ello"), "Hello");
    }

    #[test]
    fn test_locale_without_lowercase_skips_folding() {
        let s = Slugify::builder()
            .locale(Locale::turkish())
            .lower_case(false)
            .build();
        assert_eq!(s.slugify("ISPARTA"), "ISPARTA");
    }

    #[test]
    fn test_stopwords() {
        let s = Slugify::builder().stopwords(["stop", "Words"]).build();
        assert_eq!(s.slugify("stop words test"), "test");
        assert_eq!(s.slugify("STOP"), "");

        let kept = Slugify::builder().stopword("the").lower_case(false).build();
        assert_eq!(kept.slugify("The Cat in THE Hat"), "Cat-in-Hat");
    }

    #[test]
    fn test_max_length() {
        let s = Slugify::builder().max_length(8).build();
        assert_eq!(s.slugify("hello world"), "hello-wo");

        let boundary = Slugify::builder()
            .max_length(10)
            .word_boundary(true)
            .build();
        assert_eq!(boundary.slugify("This is a test for slugify"), "this-is-a");
    }

    #[test]
    fn test_max_length_skips_long_words() {
        let s = Slugify::builder()
            .max_length(12)
            .word_boundary(true)
            .build();
        assert_eq!(s.slugify("a verylongwordhere b"), "a-b");

        let ordered = Slugify::builder()
            .max_length(12)
            .word_boundary(true)
            .save_order(true)
            .build();
        assert_eq!(ordered.slugify("a verylongwordhere b"), "a");
        let sentence = Slugify::builder()
            .max_length(10)
            .word_boundary(true)
            .save_order(true)
            .build();
        assert_eq!(sentence.slugify("This is a test for slugify"), "this-is-a");
    }

    #[test]
    fn test_entities_decoded_when_enabled() {
        let s = Slugify::builder().entities(true).build();
        assert_eq!(s.slugify("caf&eacute; &#233;t&#xE9;"), "cafe-ete");
        assert_eq!(s.slugify("HTML &copy; &#169; &#xA9;"), "html");
        assert!(s.slugify("Invalid &#xyz; &#xZZ;").starts_with("invalid-"));

        assert_eq!(default().slugify("caf&eacute;"), "caf-eacute");
    }

    #[test]
    fn test_entities_decoded_before_replacements() {
        let s = Slugify::builder()
            .entities(true)
            .custom_replacement("&", " and ")
            .build();
        assert_eq!(s.slugify("Tom &amp; Jerry"), "tom-and-jerry");
    }

    #[test]
    fn test_unknown_characters_dropped_by_transliteration() {
        let s = Slugify::builder().transliterator(true).build();
        assert_eq!(s.slugify("a\u{E000}b"), "ab");
        assert_eq!(s.slugify("\u{E000}x\u{E000}"), "x");
    }

    #[test]
    fn test_config_round_trip_through_builder() {
        let config = Config::from_yaml_str("separator: underscore\nlocale: fr").unwrap();
        let s = SlugifyBuilder::from_config(config.clone()).lower_case(false).build();
        assert_eq!(s.config().separator, Separator::Underscore);
        assert_eq!(s.config().locale, Locale::french());
        assert!(!s.config().lower_case);
        assert_eq!(Slugify::new(config).slugify("Élan Vital"), "elan_vital");
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(slugify("Rust & Safety"), "rust-safety");
        assert_eq!(normalize_slug("Needs_Fixing"), "needs-fixing");
        assert_eq!(normalize_slug("already-good"), "already-good");
    }

    #[test]
    fn test_free_function_matches_default_converter() {
        let converter = Slugify::default();
        for input in ["Hello World", "Côte d'Ivoire", "", "®©✓", "ISPARTA"] {
            assert_eq!(slugify(input), converter.slugify(input));
        }
        assert_eq!(*DEFAULT, converter);
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("hello-world"));
        assert!(is_slug("Test_Slug"));
        assert!(is_slug("123"));
        assert!(!is_slug(""));
        assert!(!is_slug("-hello"));
        assert!(!is_slug("hello--world"));
        assert!(!is_slug("héllo"));
    }

    #[test]
    fn test_converter_is_shareable_across_threads() {
        let s = std::sync::Arc::new(Slugify::builder().underscore_separator(true).build());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let s = s.clone();
                std::thread::spawn(move || s.slugify(format!("Thread {i}").as_str()))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("thread_{i}"));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn output_has_slug_shape(
                input in "\\PC*",
                underscore in any::<bool>(),
                lower in any::<bool>(),
                translit in any::<bool>(),
            ) {
                let s = Slugify::builder()
                    .underscore_separator(underscore)
                    .lower_case(lower)
                    .transliterator(translit)
                    .build();
                let slug = s.slugify(input.as_str());
                prop_assert!(slug.is_empty() || is_slug(&slug), "bad slug {:?}", slug);
            }

            #[test]
            fn default_is_idempotent(input in "\\PC*") {
                let once = slugify(&input);
                prop_assert_eq!(slugify(&once), once.clone());
            }

            #[test]
            fn max_length_is_respected(
                input in "[A-Za-z0-9 ,.!-]{0,64}",
                max in 0usize..40,
                boundary in any::<bool>(),
            ) {
                let s = Slugify::builder().max_length(max).word_boundary(boundary).build();
                let slug = s.slugify(input.as_str());
                prop_assert!(slug.len() <= max);
                prop_assert!(slug.is_empty() || is_slug(&slug));
            }
        }
    }
}
