//! Target scripts and languages.
//!
//! Each target owns an embedded syllable table (see `tables/`) and,
//! for the case-marking languages, a declension table.

mod table;

pub use table::{parse_target_toml, MappingTable, TableError};

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::declension::{self, DeclensionTable};

const TOKI_PONA_TOML: &str = include_str!("tables/toki_pona.toml");
const RUSSIAN_TOML: &str = include_str!("tables/russian.toml");
const UKRAINIAN_TOML: &str = include_str!("tables/ukrainian.toml");
const LITHUANIAN_TOML: &str = include_str!("tables/lithuanian.toml");

#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("unknown target: {0:?}")]
    Unknown(String),
}

/// How a multi-word name is fed through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMode {
    /// Spaces are stripped and the whole name becomes one word.
    Joined,
    /// Each whitespace-separated word is transliterated on its own.
    PerWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    TokiPona,
    Russian,
    Ukrainian,
    Lithuanian,
}

impl Target {
    pub const ALL: [Target; 4] = [
        Target::TokiPona,
        Target::Russian,
        Target::Ukrainian,
        Target::Lithuanian,
    ];

    /// Parse a language code (`tok`, `ru`, `uk`, `lt`).
    pub fn from_code(code: &str) -> Result<Target, TargetError> {
        let trimmed = code.trim();
        Target::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TargetError::Unknown(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        match self {
            Target::TokiPona => "tok",
            Target::Russian => "ru",
            Target::Ukrainian => "uk",
            Target::Lithuanian => "lt",
        }
    }

    /// Human-readable script description.
    pub fn script(self) -> &'static str {
        match self {
            Target::TokiPona => "Toki Pona (Latin, CV syllables)",
            Target::Russian => "Cyrillic (Polivanov)",
            Target::Ukrainian => "Cyrillic (Polivanov, Ukrainian letters)",
            Target::Lithuanian => "Latin (Lithuanian orthography)",
        }
    }

    pub fn word_mode(self) -> WordMode {
        match self {
            Target::TokiPona => WordMode::Joined,
            Target::Russian | Target::Ukrainian | Target::Lithuanian => WordMode::PerWord,
        }
    }

    /// Genitive rules, for targets that mark case.
    pub fn declension(self) -> Option<&'static DeclensionTable> {
        match self {
            Target::TokiPona => None,
            Target::Russian => Some(&declension::RUSSIAN),
            Target::Ukrainian => Some(&declension::UKRAINIAN),
            Target::Lithuanian => Some(&declension::LITHUANIAN),
        }
    }

    /// Embedded table source, as shipped.
    pub fn default_toml(self) -> &'static str {
        match self {
            Target::TokiPona => TOKI_PONA_TOML,
            Target::Russian => RUSSIAN_TOML,
            Target::Ukrainian => UKRAINIAN_TOML,
            Target::Lithuanian => LITHUANIAN_TOML,
        }
    }

    /// Parsed table, built on first use and shared read-only afterwards.
    pub fn table(self) -> &'static MappingTable {
        static TABLES: [OnceLock<MappingTable>; 4] = [
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
        ];
        let slot = match self {
            Target::TokiPona => 0,
            Target::Russian => 1,
            Target::Ukrainian => 2,
            Target::Lithuanian => 3,
        };
        TABLES[slot].get_or_init(|| {
            parse_target_toml(self.default_toml()).expect("embedded target TOML must be valid")
        })
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::from_code(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::SyllableInventory;

    #[test]
    fn parse_codes() {
        assert_eq!(Target::from_code("tok").unwrap(), Target::TokiPona);
        assert_eq!(Target::from_code("RU").unwrap(), Target::Russian);
        assert_eq!(" uk ".parse::<Target>().unwrap(), Target::Ukrainian);
        assert_eq!(Target::from_code("lt").unwrap(), Target::Lithuanian);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = Target::from_code("hi").unwrap_err();
        assert!(matches!(err, TargetError::Unknown(ref c) if c == "hi"));
        assert!(Target::from_code("").is_err());
    }

    #[test]
    fn code_roundtrip() {
        for target in Target::ALL {
            assert_eq!(Target::from_code(target.code()).unwrap(), target);
            assert_eq!(target.to_string(), target.code());
        }
    }

    #[test]
    fn embedded_tables_parse() {
        for target in Target::ALL {
            let table = parse_target_toml(target.default_toml()).unwrap();
            assert!(!table.is_empty(), "{target} table is empty");
        }
    }

    #[test]
    fn cyrillic_and_lithuanian_cover_inventory() {
        let inv = SyllableInventory::global();
        for target in [Target::Russian, Target::Ukrainian, Target::Lithuanian] {
            let table = target.table();
            for syl in inv.syllables() {
                assert!(
                    table.forms(syl, 1).is_some(),
                    "{target} has no spelling for {syl}"
                );
            }
        }
    }

    #[test]
    fn only_toki_pona_contracts_diphthongs() {
        assert_eq!(Target::TokiPona.table().diphthongs().len(), 25);
        assert!(Target::Russian.table().diphthongs().is_empty());
        assert!(Target::Lithuanian.table().diphthongs().is_empty());
    }

    #[test]
    fn declension_tables() {
        assert!(Target::TokiPona.declension().is_none());
        assert!(Target::Russian.declension().is_some());
        assert!(Target::Ukrainian.declension().is_some());
        assert!(Target::Lithuanian.declension().is_some());
    }

    #[test]
    fn word_modes() {
        assert_eq!(Target::TokiPona.word_mode(), WordMode::Joined);
        assert_eq!(Target::Russian.word_mode(), WordMode::PerWord);
    }
}
