use serde::Serialize;
use tracing::debug;

use super::inventory::{Syllable, SyllableInventory};

/// Longest syllable spelling in the inventory, in characters.
pub const MAX_SYLLABLE_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokenization {
    pub syllables: Vec<Syllable>,
    /// Char index where each syllable begins.
    pub starts: Vec<usize>,
    /// Characters that matched no inventory entry and were skipped.
    pub skipped: usize,
}

/// Split romaji into syllables by greedy longest match.
///
/// At each position the 3-, 2- and 1-character windows are tried in that
/// order and the first inventory member wins. A position where nothing
/// matches is skipped one character at a time. There is exactly one
/// tokenization for any input.
pub fn tokenize(text: &str) -> Tokenization {
    let inventory = SyllableInventory::global();
    // Byte offset of every char boundary, including the end.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut result = Tokenization::default();
    let mut i = 0;
    'outer: while i < char_count {
        for size in (1..=MAX_SYLLABLE_LEN).rev() {
            if i + size > char_count {
                continue;
            }
            let window = &text[bounds[i]..bounds[i + size]];
            if let Some(syllable) = inventory.get(window) {
                result.syllables.push(syllable);
                result.starts.push(i);
                i += size;
                continue 'outer;
            }
        }
        result.skipped += 1;
        i += 1;
    }

    debug!(
        syllables = result.syllables.len(),
        skipped = result.skipped,
        "tokenized"
    );
    result
}
