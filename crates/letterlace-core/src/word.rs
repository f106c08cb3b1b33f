//! Candidate word entries.

use std::fmt::{self, Display};

/// A difficulty tier in the range 1-3.
///
/// Tiers are carried as data on [`WordEntry`]; callers decide how a tier
/// maps to grid dimensions and allowed directions.
///
/// # Examples
///
/// ```
/// use letterlace_core::DifficultyTier;
///
/// let tier = DifficultyTier::from_value(2);
/// assert_eq!(tier, DifficultyTier::Medium);
/// assert_eq!(tier.value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DifficultyTier {
    /// Tier 1.
    Easy = 1,
    /// Tier 2.
    Medium = 2,
    /// Tier 3.
    Hard = 3,
}

impl DifficultyTier {
    /// Array containing all tiers from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Creates a tier from a u8 value in the range 1-3.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-3.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("Invalid difficulty tier value: {value}"))
    }

    /// Creates a tier from a u8 value, returning `None` outside 1-3.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Returns the numeric value of this tier (1-3).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<DifficultyTier> for u8 {
    fn from(tier: DifficultyTier) -> u8 {
        tier.value()
    }
}

/// A candidate word with its gameplay metadata.
///
/// Entries arrive from an upstream content source and pass through
/// [`normalize`](crate::wordlist::normalize) before reaching a placement
/// engine. The engines read only `word`; `clue` is carried into crossword
/// clues, and `category`/`difficulty` are filtering metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The answer word. Normalized entries contain only uppercase A-Z.
    pub word: String,
    /// Clue text shown to the player.
    pub clue: String,
    /// Topic category the word belongs to.
    pub category: String,
    /// Difficulty tier assigned by the content source.
    pub difficulty: DifficultyTier,
}

impl WordEntry {
    /// Creates a new word entry.
    pub fn new(
        word: impl Into<String>,
        clue: impl Into<String>,
        category: impl Into<String>,
        difficulty: DifficultyTier,
    ) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
            category: category.into(),
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trip() {
        for tier in DifficultyTier::ALL {
            assert_eq!(DifficultyTier::from_value(tier.value()), tier);
        }
        assert_eq!(DifficultyTier::try_from_value(0), None);
        assert_eq!(DifficultyTier::try_from_value(4), None);
        assert_eq!(format!("{}", DifficultyTier::Hard), "3");
    }

    #[test]
    #[should_panic(expected = "Invalid difficulty tier value: 0")]
    fn test_from_value_zero_panics() {
        let _ = DifficultyTier::from_value(0);
    }

    #[test]
    fn test_entry_construction() {
        let entry = WordEntry::new("GUITAR", "Six strings", "music", DifficultyTier::Easy);
        assert_eq!(entry.word, "GUITAR");
        assert_eq!(entry.clue, "Six strings");
        assert_eq!(entry.category, "music");
        assert_eq!(entry.difficulty, DifficultyTier::Easy);
    }
}
