//! Character-level Unicode helpers for Japanese names.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー and the middle dot ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Characters kept by the normalizer: letters and digits in any script,
/// plus the underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert katakana to hiragana.
///
/// Only the syllabic range ァ..ヶ (U+30A1..U+30F6) has a hiragana
/// counterpart 0x60 below it; ー, ・ and the rest of the block pass through.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Fold Hepburn long-vowel marks (macron and circumflex) to plain vowels.
pub fn fold_macrons(s: &str) -> String {
    s.chars().map(fold_macron).collect()
}

/// The plain vowel of a long-vowel letter; other characters are returned as is.
pub fn fold_macron(c: char) -> char {
    match c {
        'ā' | 'â' => 'a',
        'ī' | 'î' => 'i',
        'ū' | 'û' => 'u',
        'ē' | 'ê' => 'e',
        'ō' | 'ô' => 'o',
        'Ā' | 'Â' => 'A',
        'Ī' | 'Î' => 'I',
        'Ū' | 'Û' => 'U',
        'Ē' | 'Ê' => 'E',
        'Ō' | 'Ô' => 'O',
        other => other,
    }
}

/// Upper-case the first character, leaving the rest as is.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
