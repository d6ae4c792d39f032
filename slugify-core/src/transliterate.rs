//! Reduction of non-ASCII text to ASCII.

use deunicode::deunicode_char;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Replace every non-ASCII character with its closest ASCII spelling.
///
/// Characters without a known spelling are dropped.
pub fn transliterate(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(ascii) = deunicode_char(c) {
            out.push_str(ascii);
        }
    }
    out
}

/// Strip diacritics through NFKD decomposition (`ô` becomes `o`, `ﬁ` becomes `fi`).
///
/// Characters with no decomposition stay as they are unless `transliterate`
/// is set, in which case they go through [`transliterate`] as well.
pub fn ascii_fold(text: &str, transliterate: bool) -> String {
    if text.is_ascii() {
        return text.to_string();
    }

    let folded: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    if transliterate {
        self::transliterate(&folded)
    } else {
        folded
    }
}
