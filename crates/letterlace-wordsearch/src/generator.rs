//! Randomized word placement and grid assembly.

use letterlace_core::{Direction, Letter, LetterGrid, Position, PuzzleSeed, WordEntry};
use log::{debug, trace};
use rand::{Rng, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::fill;

/// Maximum randomized `(direction, row, col)` attempts per word before the
/// word is dropped from the puzzle.
const MAX_ATTEMPTS_PER_WORD: usize = 100;

/// Configuration for [`WordSearchGenerator`].
///
/// Per-difficulty presets (grid dimensions, allowed directions, weighted
/// fill) are owned by the caller; this struct only carries the resolved
/// values for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchConfig {
    /// Number of grid columns.
    pub cols: usize,
    /// Number of grid rows; defaults to `cols` when `None`.
    pub rows: Option<usize>,
    /// Directions words may be placed along. An empty list places nothing.
    pub directions: Vec<Direction>,
    /// Fill empty cells with English-frequency-weighted letters instead of
    /// uniform A-Z.
    pub weighted_fill: bool,
}

impl WordSearchConfig {
    /// Creates a square-grid config with all eight directions and uniform
    /// fill.
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            rows: None,
            directions: Direction::ALL.to_vec(),
            weighted_fill: false,
        }
    }

    /// Sets an explicit row count.
    #[must_use]
    pub const fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Restricts placement to the given directions.
    #[must_use]
    pub fn with_directions(mut self, directions: impl Into<Vec<Direction>>) -> Self {
        self.directions = directions.into();
        self
    }

    /// Enables or disables frequency-weighted fill.
    #[must_use]
    pub const fn with_weighted_fill(mut self, weighted_fill: bool) -> Self {
        self.weighted_fill = weighted_fill;
        self
    }
}

/// A word successfully placed into the grid.
///
/// Reading `word.len()` cells from `start` along `direction` stays in
/// bounds and reproduces `word`; the generator only commits placements that
/// satisfy this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The placed word, uppercase A-Z.
    pub word: String,
    /// Grid position of the word's first letter.
    pub start: Position,
    /// Direction the word reads along.
    pub direction: Direction,
}

impl PlacedWord {
    /// Returns the grid positions covered by this placement, first letter
    /// first.
    ///
    /// For a placement produced by the generator this yields exactly
    /// `word.len()` positions.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (start, direction, len) = (self.start, self.direction, self.word.len());
        (0..len).map_while(move |i| start.offset(direction, i))
    }
}

/// A generated word-search puzzle.
///
/// The grid is always fully populated. `placements` is a subset of the
/// input words (unplaceable words are dropped) with no ordering guarantee;
/// callers judge whether the placed count is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchPuzzle {
    /// The filled letter grid.
    pub grid: LetterGrid,
    /// Words that were successfully placed.
    pub placements: Vec<PlacedWord>,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

/// Places words into a letter grid using bounded randomized retries.
///
/// Generation never fails: a word that cannot be placed within its attempt
/// limit is dropped, and an entirely unplaceable word list still yields a
/// valid, fully filled grid with an empty placement list.
///
/// The generator is a pure function of its inputs plus the seed; it holds
/// no mutable state, so one value can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use letterlace_core::{DifficultyTier, Direction, WordEntry};
/// use letterlace_wordsearch::{WordSearchConfig, WordSearchGenerator};
///
/// let config = WordSearchConfig::new(10)
///     .with_directions([Direction::Right, Direction::Down])
///     .with_weighted_fill(true);
/// let generator = WordSearchGenerator::new(config);
///
/// let words = vec![WordEntry::new("RIFF", "Repeated phrase", "music", DifficultyTier::Easy)];
/// let puzzle = generator.generate(&words);
/// assert!(puzzle.placements.len() <= words.len());
/// ```
#[derive(Debug, Clone)]
pub struct WordSearchGenerator {
    config: WordSearchConfig,
}

impl WordSearchGenerator {
    /// Creates a generator from a config.
    #[must_use]
    pub const fn new(config: WordSearchConfig) -> Self {
        Self { config }
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub const fn config(&self) -> &WordSearchConfig {
        &self.config
    }

    /// Generates a puzzle with a fresh random seed.
    ///
    /// The seed is recorded in the result so the puzzle can be reproduced
    /// with [`Self::generate_with_seed`].
    #[must_use]
    pub fn generate(&self, words: &[WordEntry]) -> WordSearchPuzzle {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates a puzzle from a fixed seed.
    ///
    /// Identical seeds, configuration, and word lists produce identical
    /// puzzles.
    #[must_use]
    pub fn generate_with_seed(&self, words: &[WordEntry], seed: PuzzleSeed) -> WordSearchPuzzle {
        let mut rng = seed.rng();
        let cols = self.config.cols;
        let rows = self.config.rows.unwrap_or(cols);
        let mut work = WorkGrid::new(rows, cols);
        let mut placements = Vec::new();

        // Longer words have fewer legal positions, so they go first.
        let mut candidates: Vec<(String, Vec<Letter>)> = words
            .iter()
            .filter_map(|entry| {
                let letters = word_letters(&entry.word)?;
                Some((entry.word.to_ascii_uppercase(), letters))
            })
            .collect();
        candidates.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

        if rows > 0 && cols > 0 && !self.config.directions.is_empty() {
            for (word, letters) in &candidates {
                match place_word(&mut work, letters, &self.config.directions, &mut rng) {
                    Some((start, direction)) => {
                        trace!("placed {word:?} at {start} going {direction:?}");
                        placements.push(PlacedWord {
                            word: word.clone(),
                            start,
                            direction,
                        });
                    }
                    None => {
                        debug!(
                            "dropping {word:?} after {MAX_ATTEMPTS_PER_WORD} failed attempts"
                        );
                    }
                }
            }
        }

        let grid = work.into_filled(self.config.weighted_fill, &mut rng);
        WordSearchPuzzle {
            grid,
            placements,
            seed,
        }
    }
}

/// Converts a word into letters, rejecting empty words and words containing
/// non-alphabetic characters.
fn word_letters(word: &str) -> Option<Vec<Letter>> {
    if word.is_empty() {
        return None;
    }
    word.chars().map(Letter::from_char).collect()
}

/// Tries up to [`MAX_ATTEMPTS_PER_WORD`] randomized placements, cycling a
/// shuffled copy of the direction list with uniformly random start
/// coordinates, and commits the first legal one.
fn place_word(
    work: &mut WorkGrid,
    letters: &[Letter],
    directions: &[Direction],
    rng: &mut Pcg64,
) -> Option<(Position, Direction)> {
    let mut order = directions.to_vec();
    order.shuffle(rng);

    for attempt in 0..MAX_ATTEMPTS_PER_WORD {
        let direction = order[attempt % order.len()];
        let start = Position::new(
            rng.random_range(0..work.rows),
            rng.random_range(0..work.cols),
        );
        if let Some(path) = work.legal_path(letters, start, direction) {
            work.commit(letters, &path);
            return Some((start, direction));
        }
    }
    None
}

/// Partially filled working grid, owned by a single generation call.
struct WorkGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Letter>>,
}

impl WorkGrid {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    fn cell(&self, pos: Position) -> Option<Letter> {
        self.cells[pos.row * self.cols + pos.col]
    }

    /// Returns the path a word would cover starting at `start`, or `None`
    /// if any cell is out of bounds or holds a different letter. Cells that
    /// already hold the needed letter are legal crossings.
    fn legal_path(
        &self,
        letters: &[Letter],
        start: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let mut path = Vec::with_capacity(letters.len());
        let mut pos = start;
        for (i, &letter) in letters.iter().enumerate() {
            if i > 0 {
                pos = pos.step(direction)?;
            }
            if pos.row >= self.rows || pos.col >= self.cols {
                return None;
            }
            if self.cell(pos).is_some_and(|existing| existing != letter) {
                return None;
            }
            path.push(pos);
        }
        Some(path)
    }

    fn commit(&mut self, letters: &[Letter], path: &[Position]) {
        for (&letter, &pos) in letters.iter().zip(path) {
            self.cells[pos.row * self.cols + pos.col] = Some(letter);
        }
    }

    /// Consumes the working grid, filling every empty cell with a random
    /// letter.
    fn into_filled(self, weighted: bool, rng: &mut Pcg64) -> LetterGrid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| fill::random_letter(rng, weighted)))
            .collect();
        LetterGrid::from_cells(self.rows, self.cols, cells)
    }
}
