//! Kana-to-romaji conversion.
//!
//! A fixed kana table (embedded TOML) maps hiragana monographs and yōon
//! digraphs to a Hepburn baseline. Katakana is folded to hiragana first.
//! Anything without a kana mapping, including already-romanized text,
//! passes through unchanged.

mod config;
mod kana;
mod table;

pub use config::{parse_kana_toml, KanaConfigError};
pub use kana::{kana_to_romaji, KanaTable};

/// Returns the embedded default kana table TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
