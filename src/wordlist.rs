//! Lookup over the fixed 4096-word table.
//!
//! Both directions are exposed: [`word_of`] for encoding, [`index_of`]
//! for decoding. `index_of` additionally accepts any unique 4-or-more
//! character prefix of a word, per the tolerance rule in the design
//! notes, so a user can abbreviate every word they write down.

use crate::wordlist_data::WORDS;

/// Number of entries in the table. Every mnemonic word index is in
/// `0..WORD_COUNT`.
pub const WORD_COUNT: usize = WORDS.len();

/// Number of bits needed to index the table (`log2(WORD_COUNT)`).
pub const WORD_BITS: u32 = 12;

/// Errors raised while resolving a word to its table index.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The word is neither an exact entry nor a unique prefix of one.
    #[error("unknown word {0:?}")]
    UnknownWord(String),
}

/// Returns the word at `index`.
///
/// # Panics
///
/// Panics if `index >= WORD_COUNT`; callers only ever produce indices
/// from a 12-bit field, which is always in range.
pub fn word_of(index: u16) -> &'static str {
    WORDS[index as usize]
}

/// Resolves `word` to its table index.
///
/// Matching is case-insensitive. `word` may be a full entry, or any
/// prefix of at least 4 characters that uniquely identifies exactly
/// one entry (every entry differs from every other in its first four
/// characters, so a 4-character prefix is always enough once it is
/// known to match at least one real word).
pub fn index_of(word: &str) -> Result<u16, Error> {
    let needle = word.to_ascii_lowercase();

    if let Ok(pos) = WORDS.binary_search(&needle.as_str()) {
        return Ok(pos as u16);
    }

    if needle.chars().count() >= 4 {
        let mut matches = WORDS.iter().enumerate().filter(|(_, w)| w.starts_with(&needle));
        if let Some((pos, _)) = matches.next() {
            if matches.next().is_none() {
                return Ok(pos as u16);
            }
        }
    }

    Err(Error::UnknownWord(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_4096_entries() {
        assert_eq!(WORD_COUNT, 4096);
    }

    #[test]
    fn table_is_sorted_and_lowercase_ascii() {
        let mut prev = "";
        for w in WORDS.iter() {
            assert!(w.is_ascii());
            assert_eq!(*w, w.to_ascii_lowercase());
            assert!(w.len() >= 3 && w.len() <= 8, "{w} out of length range");
            assert!(*w > prev, "table not strictly sorted at {w}");
            prev = w;
        }
    }

    #[test]
    fn every_word_has_a_distinct_four_char_prefix() {
        let mut prefixes = std::collections::HashSet::new();
        for w in WORDS.iter() {
            let prefix = &w[..4.min(w.len())];
            assert!(prefixes.insert(prefix), "duplicate prefix {prefix}");
        }
    }

    #[test]
    fn word_of_index_of_roundtrip() {
        for i in [0u16, 1, 2047, 4095] {
            let w = word_of(i);
            assert_eq!(index_of(w).unwrap(), i);
        }
    }

    #[test]
    fn index_of_is_case_insensitive() {
        let w = word_of(42);
        assert_eq!(index_of(&w.to_ascii_uppercase()).unwrap(), 42);
    }

    #[test]
    fn index_of_accepts_unique_four_char_prefix() {
        for i in [0u16, 100, 2000, 4095] {
            let w = word_of(i);
            let prefix = &w[..4];
            assert_eq!(index_of(prefix).unwrap(), i);
        }
    }

    #[test]
    fn index_of_rejects_unknown_word() {
        assert_eq!(
            index_of("zzzznotaword"),
            Err(Error::UnknownWord("zzzznotaword".to_string()))
        );
    }

    #[test]
    fn index_of_rejects_short_non_prefix() {
        // "ab" is shorter than the 4-character prefix floor, so even
        // if it happened to prefix a word it must not resolve.
        assert!(index_of("ab").is_err());
    }
}
