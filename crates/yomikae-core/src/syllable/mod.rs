//! Closed syllable inventory and the greedy tokenizer over it.
//!
//! The inventory is shared by every target; per-target tables only decide
//! what each syllable is written as.

mod inventory;
mod tokenizer;

pub use inventory::{Syllable, SyllableClass, SyllableInventory};
pub use tokenizer::{tokenize, Tokenization, MAX_SYLLABLE_LEN};
