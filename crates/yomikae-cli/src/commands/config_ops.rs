use std::fs;

use yomikae_core::romaji::KanaTable;
use yomikae_core::target::parse_target_toml;
use yomikae_core::Target;

/// Install user-supplied settings and kana tables.
///
/// Must run before the first transliteration; the globals are frozen on first use.
pub fn load_overrides(settings_file: Option<&str>, kana_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            yomikae_core::settings::init_custom(content),
            "Invalid settings in {file}: {}"
        );
    }
    if let Some(file) = kana_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            KanaTable::init_custom(content),
            "Invalid kana table in {file}: {}"
        );
    }
}

pub fn settings_export() {
    print!("{}", yomikae_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        yomikae_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: variants.max_candidates={}, normalize.fold_macrons={}",
        s.variants.max_candidates, s.normalize.fold_macrons
    );
}

pub fn kana_export() {
    print!("{}", yomikae_core::romaji::default_toml());
}

pub fn kana_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(yomikae_core::romaji::parse_kana_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn table_export(target: Target) {
    print!("{}", target.default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_target_toml(&content), "Error: {}");
    println!(
        "OK: {} syllables, {} diphthong rules",
        table.len(),
        table.diphthongs().len()
    );
}
