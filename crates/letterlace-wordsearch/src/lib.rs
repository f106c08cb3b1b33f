//! Word-search grid generation.
//!
//! This crate places candidate words into a rectangular letter grid along a
//! configurable set of directions, then fills the remaining cells with
//! random letters. Placement uses bounded randomized retries: each word gets
//! a fixed number of `(direction, row, col)` attempts and is silently
//! dropped if none succeeds, so generation never fails. Callers compare
//! [`WordSearchPuzzle::placements`] against their own minimum-word-count
//! threshold and retry at the content level when the result is too sparse.
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{DifficultyTier, WordEntry};
//! use letterlace_wordsearch::{WordSearchConfig, WordSearchGenerator};
//!
//! let words = vec![
//!     WordEntry::new("CAT", "Feline", "animals", DifficultyTier::Easy),
//!     WordEntry::new("DOG", "Canine", "animals", DifficultyTier::Easy),
//! ];
//! let generator = WordSearchGenerator::new(WordSearchConfig::new(10));
//! let puzzle = generator.generate(&words);
//!
//! assert_eq!(puzzle.grid.rows(), 10);
//! assert_eq!(puzzle.grid.cols(), 10);
//! ```

mod fill;
mod generator;

pub use self::generator::{PlacedWord, WordSearchConfig, WordSearchGenerator, WordSearchPuzzle};
