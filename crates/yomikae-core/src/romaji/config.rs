use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::{is_hiragana, is_katakana, katakana_to_hiragana};

#[derive(Deserialize)]
struct KanaConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key is not one or two kana: {0}")]
    InvalidKey(String),
    #[error("value for key {key} is not lowercase ASCII romaji: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
///
/// Katakana keys are stored as hiragana, the script input is folded to
/// before lookup. If both spellings of a key are present, the katakana
/// entry wins.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, KanaConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(KanaConfigError::Empty);
    }

    let mut mappings = BTreeMap::new();
    for (key, value) in config.mappings {
        let len = key.chars().count();
        if !(1..=2).contains(&len) || !key.chars().all(|c| is_hiragana(c) || is_katakana(c)) {
            return Err(KanaConfigError::InvalidKey(key));
        }
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(KanaConfigError::InvalidValue { key, value });
        }
        mappings.insert(katakana_to_hiragana(&key), value);
    }

    Ok(mappings)
}
