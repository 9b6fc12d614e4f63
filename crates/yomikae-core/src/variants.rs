//! Cartesian expansion of per-syllable spelling choices.

use std::collections::btree_set;
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

/// Sorted, duplicate-free surface forms. Never contains the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet(BTreeSet<String>);

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.0.contains(surface)
    }

    /// Lexicographically smallest candidate.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        CandidateSet(iter.into_iter().filter(|s| !s.is_empty()).collect())
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Default)]
pub struct Expansion {
    /// Joined candidates in branch order, not yet deduplicated.
    pub surfaces: Vec<String>,
    /// True when the cap forced at least one slot down to its first form.
    pub capped: bool,
}

/// Build every combination of one form per slot, joined with `separator`.
///
/// The result has the product of the slot sizes as its length, except
/// that a slot whose branching would take the running list past
/// `max_candidates` contributes only its first form. Empty slots are
/// ignored; no slots at all yields no candidates.
pub fn expand(slots: &[&[String]], separator: &str, max_candidates: usize) -> Expansion {
    let mut expansion = Expansion::default();
    if slots.is_empty() {
        return expansion;
    }

    let mut partials: Vec<Vec<&str>> = vec![Vec::with_capacity(slots.len())];
    for forms in slots {
        match forms.len() {
            0 => {}
            1 => {
                for partial in &mut partials {
                    partial.push(&forms[0]);
                }
            }
            n if partials.len() * n > max_candidates => {
                if !expansion.capped {
                    warn!(
                        max_candidates,
                        partials = partials.len(),
                        "candidate cap reached, keeping first reading only"
                    );
                }
                expansion.capped = true;
                for partial in &mut partials {
                    partial.push(&forms[0]);
                }
            }
            n => {
                let mut next = Vec::with_capacity(partials.len() * n);
                for partial in &partials {
                    for form in forms.iter() {
                        let mut branch = partial.clone();
                        branch.push(form);
                        next.push(branch);
                    }
                }
                partials = next;
            }
        }
    }

    expansion.surfaces = partials.iter().map(|p| p.join(separator)).collect();
    expansion
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(slots: &[&Vec<String>], separator: &str, max: usize) -> Expansion {
        let slots: Vec<&[String]> = slots.iter().map(|v| v.as_slice()).collect();
        expand(&slots, separator, max)
    }

    #[test]
    fn unambiguous_slots_give_one_candidate() {
        let a = forms(&["ka"]);
        let b = forms(&["si"]);
        let e = run(&[&a, &b], "", 16);
        assert_eq!(e.surfaces, ["kasi"]);
        assert!(!e.capped);
    }

    #[test]
    fn branching_multiplies() {
        let a = forms(&["si"]);
        let zu = forms(&["su", "tu"]);
        let e = run(&[&zu, &a, &zu], "", 16);
        assert_eq!(e.surfaces, ["susisu", "susitu", "tusisu", "tusitu"]);
    }

    #[test]
    fn no_slots_no_candidates() {
        let e = expand(&[], "", 16);
        assert!(e.surfaces.is_empty());
    }

    #[test]
    fn empty_slot_is_ignored() {
        let a = forms(&["a"]);
        let none: Vec<String> = Vec::new();
        let e = run(&[&a, &none, &a], "", 16);
        assert_eq!(e.surfaces, ["aa"]);
    }

    #[test]
    fn separator_joins_words() {
        let a = forms(&["Ise"]);
        let b = forms(&["Jingu", "Jinku"]);
        let e = run(&[&a, &b], " ", 16);
        assert_eq!(e.surfaces, ["Ise Jingu", "Ise Jinku"]);
    }

    #[test]
    fn cap_collapses_later_branches() {
        let zu = forms(&["su", "tu"]);
        let e = run(&[&zu, &zu, &zu], "", 4);
        assert!(e.capped);
        assert_eq!(e.surfaces.len(), 4);
        assert!(e.surfaces.iter().all(|s| s.ends_with("su")));
    }

    #[test]
    fn candidate_set_sorts_dedups_and_skips_empty() {
        let set: CandidateSet = ["Situ", "Sisu", "Situ", ""]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some("Sisu"));
        assert!(set.contains("Situ"));
        assert!(!set.contains(""));
        assert_eq!(set.into_vec(), ["Sisu", "Situ"]);
    }

    #[test]
    fn candidate_set_serializes_as_array() {
        let set: CandidateSet = ["b", "a"].into_iter().map(String::from).collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["a","b"]"#);
    }
}
