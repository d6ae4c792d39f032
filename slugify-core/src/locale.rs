//! Locale-sensitive text rules: digraph tables and case folding.

use slugify_types::Locale;

const GERMAN: &[(char, &str)] = &[
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('ẞ', "SS"),
];

const DANISH_NORWEGIAN: &[(char, &str)] = &[
    ('Æ', "Ae"),
    ('æ', "ae"),
    ('Ø', "Oe"),
    ('ø', "oe"),
    ('Å', "Aa"),
    ('å', "aa"),
];

/// Letters a locale spells with more than one ASCII letter.
pub fn digraphs(locale: &Locale) -> &'static [(char, &'static str)] {
    match locale.language() {
        "de" => GERMAN,
        "da" | "nb" | "nn" | "no" => DANISH_NORWEGIAN,
        _ => &[],
    }
}

/// Spell out locale digraphs (`ü` becomes `ue` under German rules).
pub fn expand_digraphs(text: &str, locale: &Locale) -> String {
    let table = digraphs(locale);
    if table.is_empty() || text.is_ascii() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Lowercase `text` using the case rules of `locale`.
///
/// Turkish and Azerbaijani distinguish dotted and dotless `i`: `I` folds to
/// `ı` and `İ` to `i`. Every other locale uses the Unicode default mapping.
pub fn fold_case(text: &str, locale: &Locale) -> String {
    match locale.language() {
        "tr" | "az" => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match c {
                    'I' => out.push('ı'),
                    'İ' => out.push('i'),
                    _ => out.extend(c.to_lowercase()),
                }
            }
            out
        }
        _ => text.to_lowercase(),
    }
}
