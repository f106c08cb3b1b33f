//! Core data structures for word-puzzle generation.
//!
//! This crate provides the fundamental types shared by the word-search and
//! crossword generation engines. These structures are used across placement,
//! scoring, and clue-derivation components.
//!
//! # Overview
//!
//! The crate is organized around three main concepts:
//!
//! 1. **Core types** - Fundamental puzzle types
//!    - [`letter`]: Type-safe representation of uppercase letters A-Z
//!    - [`position`]: Grid position (row, col) coordinate type
//!    - [`direction`]: The eight unit vectors a word can be placed along
//!    - [`grid`]: Rectangular letter grids
//!
//! 2. **Word lists** - Candidate words and their preparation
//!    - [`word`]: Word entries with clue, category, and difficulty metadata
//!    - [`wordlist`]: Normalization of raw candidate lists before placement
//!
//! 3. **Seeding** - Reproducible generation
//!    - [`seed`]: 32-byte puzzle seeds that drive the generators' RNG
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{Letter, Position, Direction};
//!
//! let start = Position::new(2, 3);
//! let next = start.step(Direction::DownRight).unwrap();
//! assert_eq!(next, Position::new(3, 4));
//!
//! let letter = Letter::from_char('q').unwrap();
//! assert_eq!(letter.as_char(), 'Q');
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod position;
pub mod seed;
pub mod word;
pub mod wordlist;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    grid::LetterGrid,
    letter::{Letter, LetterParseError},
    position::Position,
    seed::{PuzzleSeed, SeedParseError},
    word::{DifficultyTier, WordEntry},
    wordlist::{NormalizeConfig, normalize},
};
