//! The full name pipeline: normalize, romanize, contract, tokenize, map,
//! expand; plus last-word declension.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::declension;
use crate::diphthong::contract;
use crate::normalize::normalize;
use crate::romaji::kana_to_romaji;
use crate::settings::{settings, Settings};
use crate::syllable::tokenize;
use crate::target::{Target, WordMode};
use crate::unicode::{capitalize, fold_macron, fold_macrons};
use crate::variants::{expand, CandidateSet};

/// Candidates for one name plus what was lost on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transliteration {
    pub candidates: CandidateSet,
    /// Syllables the target has no spelling for.
    pub dropped: usize,
    /// Characters the tokenizer could not read as any syllable.
    pub skipped: usize,
    /// The candidate cap cut off at least one ambiguous reading.
    pub capped: bool,
}

/// All surface forms of `name` in `target`, sorted and deduplicated.
///
/// Empty when nothing in `name` is a recognizable syllable.
pub fn transliterate(name: &str, target: Target) -> CandidateSet {
    transliterate_with_report(name, target).candidates
}

pub fn transliterate_with_report(name: &str, target: Target) -> Transliteration {
    let _span = debug_span!("transliterate", target = target.code()).entered();
    let settings = settings();
    let max_candidates = settings.variants.max_candidates;

    let words: Vec<&str> = match target.word_mode() {
        WordMode::Joined => vec![name],
        WordMode::PerWord => name.split_whitespace().collect(),
    };

    let mut report = Transliteration::default();
    let mut word_sets: Vec<Vec<String>> = Vec::with_capacity(words.len());
    for word in words {
        let set = transliterate_word(word, target, settings, &mut report);
        if !set.is_empty() {
            word_sets.push(set.into_vec());
        }
    }

    let slots: Vec<&[String]> = word_sets.iter().map(Vec::as_slice).collect();
    let combined = expand(&slots, " ", max_candidates);
    report.capped |= combined.capped;
    report.candidates = combined.surfaces.into_iter().collect();

    debug!(
        candidates = report.candidates.len(),
        dropped = report.dropped,
        skipped = report.skipped,
        "transliterated"
    );
    report
}

/// Romanized baseline of one word, before contraction.
pub fn romanize(word: &str) -> String {
    let romaji = kana_to_romaji(&normalize(word));
    fold_long_vowels(romaji, settings())
}

fn fold_long_vowels(romaji: String, settings: &Settings) -> String {
    if settings.normalize.fold_macrons {
        fold_macrons(&romaji)
    } else {
        romaji
    }
}

fn transliterate_word(
    word: &str,
    target: Target,
    settings: &Settings,
    report: &mut Transliteration,
) -> CandidateSet {
    let table = target.table();
    let source = kana_to_romaji(&normalize(word));
    // Long vowel at each char index; tables that keep macrons never contract,
    // so these line up with the tokenizer's offsets.
    let long: Vec<Option<char>> = if table.keeps_macrons() {
        source
            .chars()
            .map(|c| (fold_macron(c) != c).then_some(c))
            .collect()
    } else {
        Vec::new()
    };
    let romaji = fold_long_vowels(source, settings);
    let contracted = contract(&romaji, table.diphthongs());
    let tokens = tokenize(&contracted);
    report.skipped += tokens.skipped;

    let mut marked: Vec<Cow<'_, [String]>> = Vec::with_capacity(tokens.syllables.len());
    let located = tokens.syllables.iter().zip(&tokens.starts);
    for (position, (&syllable, &start)) in located.enumerate() {
        let Some(forms) = table.forms(syllable, position) else {
            debug!(%syllable, "no spelling in target, dropped");
            report.dropped += 1;
            continue;
        };
        let last = start + syllable.as_str().chars().count() - 1;
        match long.get(last).copied().flatten() {
            Some(vowel) => marked.push(Cow::Owned(
                forms.iter().map(|form| lengthen(form, vowel)).collect(),
            )),
            None => marked.push(Cow::Borrowed(forms)),
        }
    }

    let slots: Vec<&[String]> = marked.iter().map(|forms| &**forms).collect();
    let expansion = expand(&slots, "", settings.variants.max_candidates);
    report.capped |= expansion.capped;
    expansion.surfaces.iter().map(|s| capitalize(s)).collect()
}

/// Put the macron of `long` back on a form ending in its plain vowel.
fn lengthen(form: &str, long: char) -> String {
    match form.strip_suffix(fold_macron(long)) {
        Some(stem) => format!("{stem}{long}"),
        None => form.to_string(),
    }
}

/// Genitive of `name` in `target`: only the last word changes. Targets
/// without case marking return `name` unchanged.
pub fn decline(name: &str, target: Target) -> String {
    match target.declension() {
        Some(table) => declension::decline(name, table),
        None => name.to_string(),
    }
}
