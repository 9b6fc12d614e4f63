use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_kana_toml, KanaConfigError};
use super::table::DEFAULT_TOML;
use crate::unicode::katakana_to_hiragana;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct KanaTable {
    map: BTreeMap<String, String>,
}

impl KanaTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KanaConfigError> {
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanaConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_kana_toml(toml_str).expect("kana TOML must be valid");
            KanaTable { map }
        })
    }

    pub fn lookup(&self, kana: &str) -> Option<&str> {
        self.map.get(kana).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Romanize `text` left to right: a two-character window first, then
    /// one character, then pass-through.
    pub fn romanize(&self, text: &str) -> String {
        let folded = katakana_to_hiragana(text);
        let chars: Vec<char> = folded.chars().collect();
        let mut out = String::with_capacity(folded.len());
        let mut key = String::with_capacity(8);
        let mut i = 0;

        while i < chars.len() {
            if i + 1 < chars.len() {
                key.clear();
                key.extend(&chars[i..i + 2]);
                if let Some(romaji) = self.lookup(&key) {
                    out.push_str(romaji);
                    i += 2;
                    continue;
                }
            }

            key.clear();
            key.push(chars[i]);
            match self.lookup(&key) {
                Some(romaji) => out.push_str(romaji),
                None => out.push(chars[i]),
            }
            i += 1;
        }

        out
    }
}

/// Romanize kana with the global table.
pub fn kana_to_romaji(text: &str) -> String {
    KanaTable::global().romanize(text)
}
