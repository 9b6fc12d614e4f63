//! Transliteration of Japanese proper names (kana or Hepburn) into Toki Pona,
//! Russian and Ukrainian Cyrillic, and Lithuanian, with genitive declension
//! for the languages that mark case.
//!
//! Every call is a pure function of its input and the embedded tables, so
//! the API is safe to use from any number of threads.

pub mod declension;
pub mod diphthong;
pub mod names;
pub mod normalize;
mod pipeline;
pub mod romaji;
pub mod settings;
pub mod syllable;
pub mod target;
pub mod unicode;
pub mod variants;

pub use pipeline::{decline, romanize, transliterate, transliterate_with_report, Transliteration};
pub use target::{Target, TargetError};
pub use variants::CandidateSet;

/// [`transliterate`] with the target given as a language code.
pub fn transliterate_code(name: &str, code: &str) -> Result<CandidateSet, TargetError> {
    Ok(transliterate(name, Target::from_code(code)?))
}

/// [`decline`] with the target given as a language code.
pub fn decline_code(name: &str, code: &str) -> Result<String, TargetError> {
    Ok(decline(name, Target::from_code(code)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_code() {
        let set = transliterate_code("Hachiman", "tok").unwrap();
        assert_eq!(set.into_vec(), ["Kasiman"]);
        assert_eq!(decline_code("Hačiman", "lt").unwrap(), "Hačimano");
    }

    #[test]
    fn unknown_code_is_not_an_empty_result() {
        assert!(matches!(
            transliterate_code("Hachiman", "xx"),
            Err(TargetError::Unknown(_))
        ));
        assert!(decline_code("Hachiman", "hi").is_err());
    }

    #[test]
    fn threads_share_tables() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| transliterate("じづ", Target::TokiPona).len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
