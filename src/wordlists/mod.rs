//! Word lists for the game
//!
//! Two embedded lists: the daily solutions (rotation order matters) and the
//! accepted guesses. Every solution is also an accepted guess.

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of words for membership checks
///
/// Lookups are case-insensitive because [`Word`] normalises case.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<Word>,
}

impl WordList {
    /// The embedded accepted-guess list
    #[must_use]
    pub fn accepted() -> Self {
        Self::from_slice(ACCEPTED)
    }

    /// Build from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        loader::words_from_slice(slice).into_iter().collect()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Case-insensitive check of a raw string
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::WordList;
    ///
    /// let list = WordList::from_slice(&["crane", "apple"]);
    /// assert!(list.contains_str("CRANE"));
    /// assert!(list.contains_str("Apple"));
    /// assert!(!list.contains_str("zzzzz"));
    /// ```
    #[must_use]
    pub fn contains_str(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for WordList {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn accepted_count_matches_const() {
        assert_eq!(ACCEPTED.len(), ACCEPTED_COUNT);
    }

    #[test]
    fn solutions_are_valid_words() {
        for &word in SOLUTIONS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn solutions_subset_of_accepted() {
        let accepted = WordList::accepted();

        for &solution in SOLUTIONS {
            assert!(
                accepted.contains_str(solution),
                "Solution '{solution}' not in accepted list"
            );
        }
    }

    #[test]
    fn accepted_has_no_invalid_entries() {
        assert_eq!(WordList::accepted().len(), ACCEPTED_COUNT);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let list = WordList::from_slice(&["frost"]);
        assert!(list.contains(&Word::new("FROST").unwrap()));
        assert!(list.contains_str("fRoSt"));
        assert!(!list.contains_str("fros"));
    }

    #[test]
    fn extend_adds_words() {
        let mut list = WordList::default();
        assert!(list.is_empty());
        list.extend(loader::words_from_slice(&["chess", "dwarf"]));
        assert_eq!(list.len(), 2);
    }
}
