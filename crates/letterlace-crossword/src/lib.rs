//! Crossword grid generation.
//!
//! This crate places candidate words into a square grid via intersection
//! search: after a centered seed word, every later word must cross an
//! already-placed letter, with legal placements scored greedily by
//! intersection count and closeness to the grid center. The winning layout
//! is converted into numbered cells and clues in standard row-major
//! numbering order.
//!
//! Generation makes a bounded number of shuffled passes over the word list
//! and returns the best layout found; it fails only when no attempt could
//! place a single word (for example, every candidate is longer than the
//! grid). In that case the caller should obtain a fresh candidate word list
//! rather than retry the same input, since the limited randomization makes
//! repeated failure on an identical shape likely.
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{DifficultyTier, WordEntry};
//! use letterlace_crossword::{CrosswordConfig, CrosswordGenerator};
//!
//! let words = vec![
//!     WordEntry::new("GUITAR", "Six strings", "music", DifficultyTier::Easy),
//!     WordEntry::new("DRUMS", "Backbeat kit", "music", DifficultyTier::Easy),
//!     WordEntry::new("STAGE", "Where bands play", "music", DifficultyTier::Easy),
//! ];
//! let generator = CrosswordGenerator::new(CrosswordConfig::new(9, 2));
//! let puzzle = generator.generate(&words)?;
//!
//! assert!(puzzle.placed_count >= 1);
//! # Ok::<(), letterlace_crossword::CrosswordError>(())
//! ```

mod generator;
mod puzzle;

pub use self::{
    generator::{CrosswordConfig, CrosswordError, CrosswordGenerator},
    puzzle::{ClueDirection, CrosswordCell, CrosswordClue, CrosswordGrid, CrosswordPuzzle},
};
