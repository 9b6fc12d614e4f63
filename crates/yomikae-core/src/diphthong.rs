//! Vowel-sequence contraction ahead of tokenization.
//!
//! Each (pattern, replacement) entry is applied once, as a whole-string
//! literal replace, in declaration order. A replacement can create a new
//! two-vowel sequence; earlier entries do not see it and there is no
//! second pass.

/// Apply `table` to `text`, one pass per entry.
pub fn contract(text: &str, table: &[(String, String)]) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in table {
        if out.contains(pattern.as_str()) {
            out = out.replace(pattern.as_str(), replacement);
        }
    }
    out
}

/// True when `pattern` is exactly two of `a i u e o`.
pub fn is_vowel_pair(pattern: &str) -> bool {
    let mut chars = pattern.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if is_vowel(a) && is_vowel(b)
    )
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|&(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn long_vowels_collapse() {
        let t = table(&[("ou", "o"), ("ei", "e"), ("uu", "u")]);
        assert_eq!(contract("toukyou", &t), "tokyo");
        assert_eq!(contract("meiji jinguu", &t), "meji jingu");
    }

    #[test]
    fn glide_insertion() {
        let t = table(&[("ia", "ija"), ("ae", "awe")]);
        assert_eq!(contract("kiaemi", &t), "kijawemi");
    }

    #[test]
    fn single_pass_per_entry() {
        // "aaa" → "aa" after one non-overlapping pass; no re-scan.
        let t = table(&[("aa", "a")]);
        assert_eq!(contract("aaa", &t), "aa");
        assert_eq!(contract("aaaa", &t), "aa");
    }

    #[test]
    fn entry_order_matters() {
        let t = table(&[("ao", "o"), ("ia", "ija")]);
        assert_eq!(contract("iao", &t), "io");
        let t = table(&[("ia", "ija"), ("ao", "o")]);
        assert_eq!(contract("iao", &t), "ijo");
    }

    #[test]
    fn empty_table_is_identity() {
        assert_eq!(contract("kaede", &[]), "kaede");
    }

    #[test]
    fn vowel_pair_check() {
        assert!(is_vowel_pair("ai"));
        assert!(!is_vowel_pair("a"));
        assert!(!is_vowel_pair("aii"));
        assert!(!is_vowel_pair("ka"));
        assert!(!is_vowel_pair(""));
    }
}
