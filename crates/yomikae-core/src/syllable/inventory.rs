use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyllableClass {
    Vowel,
    Base,
    Yoon,
    MoraicNasal,
    /// Romanized spelling shared by more than one kana (す and づ).
    Ambiguous,
}

const VOWELS: &[&str] = &["a", "i", "u", "e", "o"];

const BASE: &[&str] = &[
    "ka", "ki", "ku", "ke", "ko", //
    "sa", "shi", "su", "se", "so", //
    "ta", "chi", "tsu", "tu", "te", "to", //
    "na", "ni", "nu", "ne", "no", //
    "ha", "hi", "fu", "hu", "he", "ho", //
    "ma", "mi", "mu", "me", "mo", //
    "ya", "yu", "yo", //
    "ra", "ri", "ru", "re", "ro", //
    "wa", "wi", "we", "wo", //
    "ga", "gi", "gu", "ge", "go", //
    "za", "ji", "ze", "zo", //
    "da", "di", "du", "de", "do", //
    "ba", "bi", "bu", "be", "bo", //
    "pa", "pi", "pu", "pe", "po",
];

const YOON: &[&str] = &[
    "kya", "kyu", "kyo", "sha", "shu", "sho", "cha", "chu", "cho", //
    "nya", "nyu", "nyo", "hya", "hyu", "hyo", "mya", "myu", "myo", //
    "rya", "ryu", "ryo", "gya", "gyu", "gyo", "ja", "ju", "jo", //
    "bya", "byu", "byo", "pya", "pyu", "pyo", "dya", "dyu", "dyo",
];

const MORAIC_NASAL: &str = "n";
const AMBIGUOUS: &str = "zu";

/// A token drawn from the closed inventory. Serializes as its spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Syllable(&'static str);

impl Syllable {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn class(&self) -> SyllableClass {
        SyllableInventory::global()
            .class_of(self.0)
            .unwrap_or(SyllableClass::Base)
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub struct SyllableInventory {
    entries: HashMap<&'static str, SyllableClass>,
}

impl SyllableInventory {
    pub fn global() -> &'static SyllableInventory {
        static INSTANCE: OnceLock<SyllableInventory> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut entries = HashMap::with_capacity(VOWELS.len() + BASE.len() + YOON.len() + 2);
            entries.extend(VOWELS.iter().map(|&s| (s, SyllableClass::Vowel)));
            entries.extend(BASE.iter().map(|&s| (s, SyllableClass::Base)));
            entries.extend(YOON.iter().map(|&s| (s, SyllableClass::Yoon)));
            entries.insert(MORAIC_NASAL, SyllableClass::MoraicNasal);
            entries.insert(AMBIGUOUS, SyllableClass::Ambiguous);
            SyllableInventory { entries }
        })
    }

    /// Resolve a spelling to its inventory token.
    pub fn get(&self, spelling: &str) -> Option<Syllable> {
        self.entries
            .get_key_value(spelling)
            .map(|(&key, _)| Syllable(key))
    }

    pub fn class_of(&self, spelling: &str) -> Option<SyllableClass> {
        self.entries.get(spelling).copied()
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All syllables, sorted by spelling.
    pub fn syllables(&self) -> Vec<Syllable> {
        let mut all: Vec<Syllable> = self.entries.keys().map(|&k| Syllable(k)).collect();
        all.sort();
        all
    }
}
