//! Genitive declension of the last word of a name.
//!
//! Each language has its own ordered rule list. Only the final
//! whitespace-separated word is touched; the first rule whose suffix
//! matches wins, and a word matching no rule is left as is.

/// One suffix substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Replace `suffix` with `replacement`.
    Replace {
        suffix: &'static str,
        replacement: &'static str,
    },
    /// Replace `suffix` with `after_class` when the character just before
    /// it is one of `class`, otherwise with `otherwise`.
    AfterClass {
        suffix: &'static str,
        class: &'static str,
        after_class: &'static str,
        otherwise: &'static str,
    },
}

impl Rule {
    fn suffix(&self) -> &'static str {
        match *self {
            Rule::Replace { suffix, .. } | Rule::AfterClass { suffix, .. } => suffix,
        }
    }

    fn replacement(&self, preceding: Option<char>) -> &'static str {
        match *self {
            Rule::Replace { replacement, .. } => replacement,
            Rule::AfterClass {
                class,
                after_class,
                otherwise,
                ..
            } => match preceding {
                Some(c) if class.contains(c) => after_class,
                _ => otherwise,
            },
        }
    }
}

#[derive(Debug)]
pub struct DeclensionTable {
    pub rules: &'static [Rule],
    /// Compare endings case-insensitively.
    pub fold_case: bool,
}

const fn replace(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule::Replace {
        suffix,
        replacement,
    }
}

pub static LITHUANIAN: DeclensionTable = DeclensionTable {
    rules: &[
        replace("an", "ano"),
        replace("in", "ino"),
        replace("un", "uno"),
        replace("en", "eno"),
        replace("on", "ono"),
        replace("a", "os"),
        replace("i", "io"),
        replace("u", "us"),
        replace("e", "ės"),
        replace("o", "o"),
    ],
    fold_case: true,
};

pub static RUSSIAN: DeclensionTable = DeclensionTable {
    rules: &[
        replace("ан", "ана"),
        replace("ин", "ина"),
        replace("ун", "уна"),
        replace("эн", "эна"),
        replace("он", "она"),
        Rule::AfterClass {
            suffix: "а",
            class: "гкхжчшщ",
            after_class: "и",
            otherwise: "ы",
        },
    ],
    fold_case: false,
};

pub static UKRAINIAN: DeclensionTable = DeclensionTable {
    rules: &[
        replace("ан", "ана"),
        replace("ін", "іна"),
        replace("ун", "уна"),
        replace("ен", "ена"),
        replace("он", "она"),
        replace("а", "и"),
    ],
    fold_case: false,
};

/// Split `word` at the start of `suffix` if it ends with it.
fn split_suffix<'a>(word: &'a str, suffix: &str, fold_case: bool) -> Option<&'a str> {
    let n = suffix.chars().count();
    let start = word.char_indices().rev().nth(n.checked_sub(1)?)?.0;
    let tail = &word[start..];
    let matched = if fold_case {
        tail.to_lowercase() == suffix
    } else {
        tail == suffix
    };
    matched.then(|| &word[..start])
}

/// Decline a single word.
pub fn decline_word(word: &str, table: &DeclensionTable) -> String {
    for rule in table.rules {
        if let Some(stem) = split_suffix(word, rule.suffix(), table.fold_case) {
            let replacement = rule.replacement(stem.chars().next_back());
            return format!("{stem}{replacement}");
        }
    }
    word.to_string()
}

/// Decline the last word of `name`; words are re-joined with single spaces.
pub fn decline(name: &str, table: &DeclensionTable) -> String {
    let mut words: Vec<&str> = name.split_whitespace().collect();
    let Some(last) = words.pop() else {
        return name.to_string();
    };
    let declined = decline_word(last, table);
    words.push(&declined);
    words.join(" ")
}
