//! Input canonicalization: NFKC, lower case, word characters only.

use unicode_normalization::UnicodeNormalization;

use crate::unicode::is_word_char;

/// Canonicalize raw name text.
///
/// NFKC composes dakuten and widens half-width katakana, so kana reaches
/// the romanizer in the form the kana table is keyed by. Hyphens, spaces,
/// brackets and other punctuation are removed. Macron vowels survive as
/// their own code points.
///
/// Dropping a character can leave two composable code points side by side
/// (a conjoining jamo pair split by a hyphen), so the pass repeats until
/// the text is stable.
pub fn normalize(text: &str) -> String {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    text.nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c))
        .collect()
}
