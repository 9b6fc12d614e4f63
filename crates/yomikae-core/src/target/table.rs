use std::collections::BTreeMap;
use std::slice;

use serde::Deserialize;

use crate::diphthong::is_vowel_pair;
use crate::syllable::{Syllable, SyllableClass, SyllableInventory};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableConfig {
    #[serde(default)]
    keep_macrons: bool,
    #[serde(default)]
    diphthongs: Vec<(String, String)>,
    base: BTreeMap<String, String>,
    #[serde(default)]
    initial: BTreeMap<String, String>,
    #[serde(default)]
    yoon: BTreeMap<String, String>,
    #[serde(default)]
    ambiguous: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[base] table is empty")]
    Empty,
    #[error("[{section}] key is not a known syllable: {key}")]
    UnknownSyllable { section: &'static str, key: String },
    #[error("[{section}] key {key} is a {class:?} syllable")]
    WrongClass {
        section: &'static str,
        key: String,
        class: SyllableClass,
    },
    #[error("[{section}] empty value for key: {key}")]
    EmptyValue { section: &'static str, key: String },
    #[error("diphthong pattern must be two vowels: {0:?}")]
    InvalidDiphthong(String),
    #[error("keep_macrons cannot be combined with diphthong contraction")]
    MacronsWithDiphthongs,
}

/// Syllable → target-script lookup for one target.
#[derive(Debug, Clone)]
pub struct MappingTable {
    keep_macrons: bool,
    diphthongs: Vec<(String, String)>,
    base: BTreeMap<String, String>,
    initial: BTreeMap<String, String>,
    yoon: BTreeMap<String, String>,
    ambiguous: BTreeMap<String, Vec<String>>,
}

impl MappingTable {
    /// Long vowels written with a macron in the source keep it in the output.
    pub fn keeps_macrons(&self) -> bool {
        self.keep_macrons
    }

    /// Ordered contraction table; empty for targets that keep vowel runs.
    pub fn diphthongs(&self) -> &[(String, String)] {
        &self.diphthongs
    }

    /// Candidate spellings of `syllable` at word position `position`.
    ///
    /// Unambiguous syllables yield one form. The ambiguous mora yields
    /// every reading the target defines for it. `None` (or an empty slice)
    /// means the target has no spelling and the syllable is dropped.
    pub fn forms(&self, syllable: Syllable, position: usize) -> Option<&[String]> {
        let key = syllable.as_str();
        match syllable.class() {
            SyllableClass::Yoon => self.yoon.get(key).map(slice::from_ref),
            SyllableClass::Ambiguous => self
                .ambiguous
                .get(key)
                .map(Vec::as_slice)
                .filter(|forms| !forms.is_empty()),
            SyllableClass::Vowel | SyllableClass::Base | SyllableClass::MoraicNasal => {
                let initial = if position == 0 {
                    self.initial.get(key)
                } else {
                    None
                };
                initial.or_else(|| self.base.get(key)).map(slice::from_ref)
            }
        }
    }

    /// Number of syllables with at least one spelling.
    pub fn len(&self) -> usize {
        self.base.len() + self.yoon.len() + self.ambiguous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse and validate a target table.
pub fn parse_target_toml(toml_str: &str) -> Result<MappingTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.base.is_empty() {
        return Err(TableError::Empty);
    }

    let plain = [
        SyllableClass::Vowel,
        SyllableClass::Base,
        SyllableClass::MoraicNasal,
    ];
    check_section("base", &config.base, &plain)?;
    check_section("initial", &config.initial, &plain)?;
    check_section("yoon", &config.yoon, &[SyllableClass::Yoon])?;

    for (key, forms) in &config.ambiguous {
        check_key("ambiguous", key, &[SyllableClass::Ambiguous])?;
        if forms.iter().any(String::is_empty) {
            return Err(TableError::EmptyValue {
                section: "ambiguous",
                key: key.clone(),
            });
        }
    }

    for (pattern, _) in &config.diphthongs {
        if !is_vowel_pair(pattern) {
            return Err(TableError::InvalidDiphthong(pattern.clone()));
        }
    }

    // Contraction shifts char offsets, so source vowels could not be traced back.
    if config.keep_macrons && !config.diphthongs.is_empty() {
        return Err(TableError::MacronsWithDiphthongs);
    }

    Ok(MappingTable {
        keep_macrons: config.keep_macrons,
        diphthongs: config.diphthongs,
        base: config.base,
        initial: config.initial,
        yoon: config.yoon,
        ambiguous: config.ambiguous,
    })
}

fn check_section(
    section: &'static str,
    map: &BTreeMap<String, String>,
    allowed: &[SyllableClass],
) -> Result<(), TableError> {
    for (key, value) in map {
        check_key(section, key, allowed)?;
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                section,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn check_key(
    section: &'static str,
    key: &str,
    allowed: &[SyllableClass],
) -> Result<(), TableError> {
    let class = SyllableInventory::global().class_of(key).ok_or_else(|| {
        TableError::UnknownSyllable {
            section,
            key: key.to_string(),
        }
    })?;
    if !allowed.contains(&class) {
        return Err(TableError::WrongClass {
            section,
            key: key.to_string(),
            class,
        });
    }
    Ok(())
}
