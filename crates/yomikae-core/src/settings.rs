//! Global settings loaded from TOML, following the same OnceLock pattern as the kana table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub variants: VariantSettings,
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantSettings {
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeSettings {
    #[serde(default = "default_fold_macrons")]
    pub fold_macrons: bool,
}

fn default_fold_macrons() -> bool {
    true
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.variants.max_candidates == 0 {
        return Err(SettingsError::InvalidValue {
            field: "variants.max_candidates".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.variants.max_candidates, 256);
        assert!(s.normalize.fold_macrons);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[variants]
max_candidates = 8

[normalize]
fold_macrons = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.variants.max_candidates, 8);
        assert!(!s.normalize.fold_macrons);
    }

    #[test]
    fn fold_macrons_defaults_on() {
        let toml = r#"
[variants]
max_candidates = 8

[normalize]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.normalize.fold_macrons);
    }

    #[test]
    fn error_zero_max_candidates() {
        let toml = r#"
[variants]
max_candidates = 0

[normalize]
fold_macrons = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("variants.max_candidates"));
    }

    #[test]
    fn error_negative_max_candidates() {
        let toml = r#"
[variants]
max_candidates = -1

[normalize]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[variants]
max_candidates = 8
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
