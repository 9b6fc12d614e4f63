//! Proper-name extraction from source labels.
//!
//! Source labels are Indonesian ("Kuil X", "Kuil Agung X"); the bare name is
//! what gets transliterated. Adding a target-language shrine phrase around
//! the result is up to the caller.

use serde::Serialize;

const GRAND_PREFIX: &str = "Kuil Agung ";
const PREFIX: &str = "Kuil ";

/// Trailing institution words dropped by [`strip_shrine_suffix`].
const SHRINE_SUFFIXES: &[&str] = &[
    "Jinja", "Jingu", "Taisha", "Tenmangu", "Gu", "Ji", "Tera", "Dera", "In", "An", "Miya",
    "Yashiro",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedName {
    pub name: String,
    /// The label named a grand shrine ("Kuil Agung").
    pub is_grand: bool,
}

/// Pull the proper name out of an Indonesian shrine label.
///
/// Parenthesized and bracketed annotations are removed first. Returns
/// `None` for labels without a "Kuil" prefix or with nothing after it.
pub fn extract_name(label: &str) -> Option<ExtractedName> {
    let cleaned = strip_annotations(label);
    let cleaned = cleaned.trim();
    for (prefix, is_grand) in [(GRAND_PREFIX, true), (PREFIX, false)] {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            let name = rest.trim();
            if name.is_empty() {
                return None;
            }
            return Some(ExtractedName {
                name: name.to_string(),
                is_grand,
            });
        }
    }
    None
}

/// Remove `(...)` and `[...]` spans. An unclosed bracket is kept as text.
pub fn strip_annotations(text: &str) -> String {
    let mut out = text.to_string();
    for (open, close) in [('(', ')'), ('[', ']')] {
        let mut result = String::with_capacity(out.len());
        let mut rest = out.as_str();
        while let Some(start) = rest.find(open) {
            match rest[start..].find(close) {
                Some(len) => {
                    result.push_str(&rest[..start]);
                    rest = &rest[start + len + close.len_utf8()..];
                }
                None => break,
            }
        }
        result.push_str(rest);
        out = result;
    }
    out
}

/// Drop one trailing institution word ("Jinja", "Tera", ...), if present
/// as a separate word. The first suffix in list order wins.
pub fn strip_shrine_suffix(name: &str) -> &str {
    let trimmed = name.trim_end();
    for suffix in SHRINE_SUFFIXES {
        if let Some(stem) = trimmed.strip_suffix(suffix) {
            if stem.ends_with(' ') {
                return stem.trim_end();
            }
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_label() {
        let got = extract_name("Kuil Hachiman").unwrap();
        assert_eq!(got.name, "Hachiman");
        assert!(!got.is_grand);
    }

    #[test]
    fn grand_label() {
        let got = extract_name("Kuil Agung Ise").unwrap();
        assert_eq!(got.name, "Ise");
        assert!(got.is_grand);
    }

    #[test]
    fn annotations_removed() {
        let got = extract_name("Kuil Kasuga (Nara) [1]").unwrap();
        assert_eq!(got.name, "Kasuga");
        assert_eq!(strip_annotations("a (b) c (d"), "a  c (d");
    }

    #[test]
    fn casing_preserved() {
        assert_eq!(extract_name("Kuil Ōmiwa").unwrap().name, "Ōmiwa");
    }

    #[test]
    fn rejects_other_labels() {
        assert_eq!(extract_name("Wihara Todai"), None);
        assert_eq!(extract_name("Kuil "), None);
        assert_eq!(extract_name("Kuil (x)"), None);
        assert_eq!(extract_name(""), None);
    }

    #[test]
    fn shrine_suffix() {
        assert_eq!(strip_shrine_suffix("Hachiman Jinja"), "Hachiman");
        assert_eq!(strip_shrine_suffix("Kiyomizu Dera"), "Kiyomizu");
        assert_eq!(strip_shrine_suffix("Meiji Jingu"), "Meiji");
        // Not a separate word.
        assert_eq!(strip_shrine_suffix("Inari"), "Inari");
        assert_eq!(strip_shrine_suffix("Tenjin"), "Tenjin");
        assert_eq!(strip_shrine_suffix("Jinja"), "Jinja");
    }
}
