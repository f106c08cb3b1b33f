//! Normalization of raw candidate word lists.
//!
//! Upstream content sources produce free-form candidate entries. Before a
//! placement engine runs, the list is cleaned into a predictable shape:
//! uppercase A-Z answers within length bounds, unique, and restricted to the
//! requested categories. Normalization never fails; a short or empty result
//! is returned as-is and callers judge it against their own word-count
//! requirements.

use std::collections::HashSet;

use crate::WordEntry;

/// Configuration for [`normalize`].
///
/// `min_words` is advisory: the normalizer never enforces it, it is carried
/// so callers can compare the result length against the threshold they
/// configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Minimum usable word count, judged by the caller after normalization.
    pub min_words: usize,
    /// Maximum number of entries kept; the list is truncated in order.
    pub max_words: usize,
    /// Minimum normalized word length. Defaults to
    /// [`Self::DEFAULT_MIN_WORD_LENGTH`].
    pub min_word_length: usize,
    /// Maximum normalized word length. Defaults to
    /// [`Self::DEFAULT_MAX_WORD_LENGTH`].
    pub max_word_length: usize,
    /// Categories to keep, matched case-insensitively. An empty list keeps
    /// every category.
    pub focus_categories: Vec<String>,
}

impl NormalizeConfig {
    /// Default lower bound on normalized word length.
    pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
    /// Default upper bound on normalized word length.
    pub const DEFAULT_MAX_WORD_LENGTH: usize = 12;

    /// Creates a config with the default length bounds and no category
    /// restriction.
    #[must_use]
    pub const fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
            min_word_length: Self::DEFAULT_MIN_WORD_LENGTH,
            max_word_length: Self::DEFAULT_MAX_WORD_LENGTH,
            focus_categories: Vec::new(),
        }
    }

    /// Restricts the result to the given categories (case-insensitive).
    #[must_use]
    pub fn with_focus_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.focus_categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Cleans a raw candidate list into placement-ready entries.
///
/// For each entry the word is uppercased and stripped of non-alphabetic
/// characters. Entries are then dropped when the cleaned word falls outside
/// the configured length bounds, when the word duplicates an earlier entry
/// (first occurrence wins, even if that occurrence is itself dropped by the
/// category filter), or when the category does not match a focus category.
/// Finally the list is truncated to `max_words`, preserving input order
/// throughout.
///
/// There is no failure path: the result may be empty or shorter than
/// `config.min_words`, and downstream callers decide whether that is
/// usable.
///
/// # Examples
///
/// ```
/// use letterlace_core::{DifficultyTier, NormalizeConfig, WordEntry, normalize};
///
/// let raw = vec![
///     WordEntry::new("rock 'n' roll", "Genre", "music", DifficultyTier::Easy),
///     WordEntry::new("amp", "Makes it louder", "music", DifficultyTier::Easy),
///     WordEntry::new("AMP", "Duplicate", "music", DifficultyTier::Easy),
/// ];
/// let cleaned = normalize(&raw, &NormalizeConfig::new(1, 10));
///
/// assert_eq!(cleaned.len(), 2);
/// assert_eq!(cleaned[0].word, "ROCKNROLL");
/// assert_eq!(cleaned[1].word, "AMP");
/// ```
#[must_use]
pub fn normalize(entries: &[WordEntry], config: &NormalizeConfig) -> Vec<WordEntry> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for entry in entries {
        if result.len() >= config.max_words {
            break;
        }

        let word: String = entry
            .word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.to_ascii_uppercase())
            .collect();

        if word.len() < config.min_word_length || word.len() > config.max_word_length {
            continue;
        }
        if !seen.insert(word.clone()) {
            continue;
        }
        if !category_allowed(&entry.category, &config.focus_categories) {
            continue;
        }

        result.push(WordEntry {
            word,
            clue: entry.clue.clone(),
            category: entry.category.clone(),
            difficulty: entry.difficulty,
        });
    }

    result
}

fn category_allowed(category: &str, focus: &[String]) -> bool {
    focus.is_empty() || focus.iter().any(|f| f.eq_ignore_ascii_case(category))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::DifficultyTier;

    fn entry(word: &str, category: &str) -> WordEntry {
        WordEntry::new(word, "clue", category, DifficultyTier::Medium)
    }

    #[test]
    fn test_uppercases_and_strips() {
        let cleaned = normalize(
            &[entry("jazz-fusion", "music")],
            &NormalizeConfig::new(1, 10),
        );
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].word, "JAZZFUSION");
    }

    #[test]
    fn test_length_bounds_apply_after_cleaning() {
        let config = NormalizeConfig::new(1, 10);
        // "a-b" cleans to "AB" (too short), "w" * 13 is too long
        let cleaned = normalize(
            &[entry("a-b", "x"), entry(&"w".repeat(13), "x"), entry("cat", "x")],
            &config,
        );
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].word, "CAT");
    }

    #[test]
    fn test_dedupes_keeping_first() {
        let cleaned = normalize(
            &[entry("Drum", "a"), entry("DRUM", "b"), entry("d r u m", "c")],
            &NormalizeConfig::new(1, 10),
        );
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].category, "a");
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let config =
            NormalizeConfig::new(1, 10).with_focus_categories(["Music"]);
        let cleaned = normalize(
            &[entry("drum", "MUSIC"), entry("boat", "travel")],
            &config,
        );
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].word, "DRUM");
    }

    #[test]
    fn test_truncates_preserving_order() {
        let raw: Vec<_> = ["one", "two", "three", "four"]
            .iter()
            .map(|w| entry(w, "x"))
            .collect();
        let cleaned = normalize(&raw, &NormalizeConfig::new(1, 2));
        let words: Vec<_> = cleaned.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["ONE", "TWO"]);
    }

    #[test]
    fn test_empty_input_is_fine() {
        assert!(normalize(&[], &NormalizeConfig::new(1, 10)).is_empty());
    }

    proptest! {
        #[test]
        fn prop_output_is_clean(words in prop::collection::vec("[ -~]{0,20}", 0..30)) {
            let raw: Vec<_> = words.iter().map(|w| entry(w, "any")).collect();
            let config = NormalizeConfig::new(1, 10);
            let cleaned = normalize(&raw, &config);

            prop_assert!(cleaned.len() <= config.max_words);

            let mut seen = HashSet::new();
            for entry in &cleaned {
                prop_assert!(entry.word.chars().all(|ch| ch.is_ascii_uppercase()));
                prop_assert!(entry.word.len() >= config.min_word_length);
                prop_assert!(entry.word.len() <= config.max_word_length);
                prop_assert!(seen.insert(entry.word.clone()));
            }
        }
    }
}
