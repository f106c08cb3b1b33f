//! Intersection-based word placement and clue derivation.

use std::{cmp::Reverse, collections::HashMap};

use derive_more::{Display, Error};
use letterlace_core::{Letter, Position, PuzzleSeed, WordEntry};
use log::{debug, trace};
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;

use crate::puzzle::{ClueDirection, CrosswordCell, CrosswordClue, CrosswordGrid, CrosswordPuzzle};

/// Number of shuffled passes over the word list before the best layout is
/// accepted.
const MAX_ATTEMPTS: usize = 5;

/// Score contribution of a single intersection. The greedy score is
/// `intersections * INTERSECTION_WEIGHT - distance_from_center`, a tuned
/// heuristic that favors densely crossing, centered layouts.
const INTERSECTION_WEIGHT: isize = 10;

/// Configuration for [`CrosswordGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Attempts stop early once a layout places this many words. The best
    /// layout is returned either way; only zero placements is an error.
    pub min_words: usize,
}

impl CrosswordConfig {
    /// Creates a config.
    #[must_use]
    pub const fn new(grid_size: usize, min_words: usize) -> Self {
        Self {
            grid_size,
            min_words,
        }
    }
}

/// Error returned when crossword generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CrosswordError {
    /// The best of all attempts placed zero words, e.g. because every
    /// candidate is longer than the grid. Retrying with the same input is
    /// likely to fail again; regenerate the candidate list instead.
    #[display("no candidate words could be placed in a {grid_size}x{grid_size} grid")]
    PlacementFailed {
        /// Side length of the rejected grid.
        grid_size: usize,
    },
}

/// Places words into a square grid via intersection search.
///
/// Each generation run makes up to five shuffled passes over the word
/// list. A pass seeds the grid with its longest candidate centered on the
/// middle row, then greedily adds words at the highest-scoring legal
/// position; words with no legal position are skipped. The pass that
/// places the most words wins, and its layout is converted into numbered
/// cells and clues.
///
/// The generator holds no mutable state, so one value can serve concurrent
/// callers.
///
/// # Examples
///
/// ```
/// use letterlace_core::{DifficultyTier, WordEntry};
/// use letterlace_crossword::{ClueDirection, CrosswordConfig, CrosswordGenerator};
///
/// let words = vec![
///     WordEntry::new("CAT", "Feline", "animals", DifficultyTier::Easy),
///     WordEntry::new("COB", "Corn core", "food", DifficultyTier::Easy),
/// ];
/// let generator = CrosswordGenerator::new(CrosswordConfig::new(5, 2));
/// let puzzle = generator.generate(&words)?;
///
/// assert_eq!(puzzle.placed_count, 2);
/// assert_eq!(puzzle.clues_in(ClueDirection::Across).count(), 1);
/// assert_eq!(puzzle.clues_in(ClueDirection::Down).count(), 1);
/// # Ok::<(), letterlace_crossword::CrosswordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CrosswordGenerator {
    config: CrosswordConfig,
}

impl CrosswordGenerator {
    /// Creates a generator from a config.
    #[must_use]
    pub const fn new(config: CrosswordConfig) -> Self {
        Self { config }
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub const fn config(&self) -> &CrosswordConfig {
        &self.config
    }

    /// Generates a puzzle with a fresh random seed.
    ///
    /// The seed is recorded in the result so the puzzle can be reproduced
    /// with [`Self::generate_with_seed`].
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::PlacementFailed`] if no attempt placed a
    /// single word.
    pub fn generate(&self, words: &[WordEntry]) -> Result<CrosswordPuzzle, CrosswordError> {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates a puzzle from a fixed seed.
    ///
    /// Identical seeds, configuration, and word lists produce identical
    /// puzzles.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::PlacementFailed`] if no attempt placed a
    /// single word.
    pub fn generate_with_seed(
        &self,
        words: &[WordEntry],
        seed: PuzzleSeed,
    ) -> Result<CrosswordPuzzle, CrosswordError> {
        let mut rng = seed.rng();

        // Words reach the engine normalized and unique; duplicates would
        // overlay each other and corrupt clue numbering, so drop them here
        // as well.
        let mut seen = Vec::new();
        let candidates: Vec<Candidate> = words
            .iter()
            .enumerate()
            .filter_map(|(entry_index, entry)| {
                let letters = word_letters(&entry.word)?;
                let word = entry.word.to_ascii_uppercase();
                if seen.contains(&word) {
                    return None;
                }
                seen.push(word.clone());
                Some(Candidate {
                    entry_index,
                    word,
                    letters,
                })
            })
            .collect();

        let mut best: Option<Layout> = None;
        for attempt in 0..MAX_ATTEMPTS {
            let layout = self.run_attempt(&candidates, &mut rng);
            debug!(
                "attempt {}: placed {} of {} candidates",
                attempt + 1,
                layout.placements.len(),
                candidates.len()
            );
            if best
                .as_ref()
                .is_none_or(|b| layout.placements.len() > b.placements.len())
            {
                best = Some(layout);
            }
            if best
                .as_ref()
                .is_some_and(|b| b.placements.len() >= self.config.min_words)
            {
                break;
            }
        }

        let best = best
            .filter(|layout| !layout.placements.is_empty())
            .ok_or(CrosswordError::PlacementFailed {
                grid_size: self.config.grid_size,
            })?;
        Ok(finalize(&best, words, seed))
    }

    /// One shuffled pass over the candidate list.
    fn run_attempt(&self, candidates: &[Candidate], rng: &mut Pcg64) -> Layout {
        let size = self.config.grid_size;
        let mut order: Vec<&Candidate> = candidates.iter().collect();
        order.shuffle(rng);
        order.retain(|candidate| candidate.letters.len() <= size);
        // Stable sort keeps the shuffled order within each length.
        order.sort_by_key(|candidate| Reverse(candidate.letters.len()));

        let mut layout = Layout::new(size);
        for candidate in order {
            if layout.placements.is_empty() {
                let start = Position::new(size / 2, (size - candidate.letters.len()) / 2);
                layout.commit(candidate, start, ClueDirection::Across);
            } else if let Some((start, direction, score)) =
                layout.best_placement(&candidate.letters)
            {
                trace!(
                    "placing {:?} at {start} going {direction} (score {score})",
                    candidate.word
                );
                layout.commit(candidate, start, direction);
            } else {
                trace!("no legal placement for {:?}", candidate.word);
            }
        }
        layout
    }
}

/// A word prepared for placement.
struct Candidate {
    entry_index: usize,
    word: String,
    letters: Vec<Letter>,
}

/// A word committed into a working layout.
struct Placement {
    entry_index: usize,
    answer: String,
    start: Position,
    direction: ClueDirection,
    length: usize,
}

impl Placement {
    fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (start, direction, len) = (self.start, self.direction.as_direction(), self.length);
        (0..len).map_while(move |i| start.offset(direction, i))
    }
}

/// Working letter grid for a single attempt, owned by the generation call.
struct Layout {
    size: usize,
    cells: Vec<Option<Letter>>,
    placements: Vec<Placement>,
}

impl Layout {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            placements: Vec::new(),
        }
    }

    /// Returns the letter at a position, treating out-of-bounds as empty.
    fn letter_at(&self, pos: Position) -> Option<Letter> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells[pos.row * self.size + pos.col]
    }

    /// Finds the highest-scoring legal placement, scanning positions in
    /// row-major order with across before down; the first of equal scores
    /// wins.
    fn best_placement(&self, letters: &[Letter]) -> Option<(Position, ClueDirection, isize)> {
        let mut best: Option<(Position, ClueDirection, isize)> = None;
        for row in 0..self.size {
            for col in 0..self.size {
                let start = Position::new(row, col);
                for direction in ClueDirection::ALL {
                    let Some(score) = self.placement_score(letters, start, direction) else {
                        continue;
                    };
                    if best.is_none_or(|(_, _, best_score)| score > best_score) {
                        best = Some((start, direction, score));
                    }
                }
            }
        }
        best
    }

    /// Scores a placement, or returns `None` when it is illegal.
    ///
    /// Legality: the path stays in bounds; the cells immediately before
    /// the start and after the end are empty or outside the grid; every
    /// covered cell is empty or already holds the needed letter; both
    /// perpendicular neighbours of every *empty* covered cell are empty,
    /// which stops a placement from spelling an unintended parallel word;
    /// and at least one covered cell intersects an existing letter unless
    /// the grid holds nothing yet. Matching overlaps are deliberately
    /// exempt from the neighbour rule so crossings can sit side by side.
    fn placement_score(
        &self,
        letters: &[Letter],
        start: Position,
        direction: ClueDirection,
    ) -> Option<isize> {
        let axis = direction.as_direction();
        let end = start.offset(axis, letters.len().checked_sub(1)?)?;
        if end.row >= self.size || end.col >= self.size {
            return None;
        }

        // The word must not run into a neighbour along its own axis.
        let occupied = |pos: Option<Position>| {
            pos.is_some_and(|pos| self.letter_at(pos).is_some())
        };
        if occupied(start.step(direction.reversed())) || occupied(end.step(axis)) {
            return None;
        }

        let mut intersections = 0_usize;
        for (i, &letter) in letters.iter().enumerate() {
            let pos = start.offset(axis, i)?;
            match self.letter_at(pos) {
                Some(existing) if existing == letter => intersections += 1,
                Some(_) => return None,
                None => {
                    for side in direction.perpendicular() {
                        if occupied(pos.step(side)) {
                            return None;
                        }
                    }
                }
            }
        }

        if intersections == 0 && !self.placements.is_empty() {
            return None;
        }

        let center = Position::new(self.size / 2, self.size / 2);
        let distance = isize::try_from(start.manhattan_distance(center)).ok()?;
        let crossings = isize::try_from(intersections).ok()?;
        Some(crossings * INTERSECTION_WEIGHT - distance)
    }

    fn commit(&mut self, candidate: &Candidate, start: Position, direction: ClueDirection) {
        let axis = direction.as_direction();
        for (i, &letter) in candidate.letters.iter().enumerate() {
            if let Some(pos) = start.offset(axis, i) {
                self.cells[pos.row * self.size + pos.col] = Some(letter);
            }
        }
        self.placements.push(Placement {
            entry_index: candidate.entry_index,
            answer: candidate.word.clone(),
            start,
            direction,
            length: candidate.letters.len(),
        });
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

/// Converts the winning layout into the final cell grid and clue list.
///
/// Clue numbers are assigned by scanning cells in row-major order and
/// numbering each cell where at least one word starts; a cell starting
/// both an across and a down word shares one number. Every covered cell
/// is then back-tagged with the numbers of the words running through it.
fn finalize(layout: &Layout, words: &[WordEntry], seed: PuzzleSeed) -> CrosswordPuzzle {
    let cells = layout
        .cells
        .iter()
        .map(|cell| match cell {
            Some(letter) => CrosswordCell::Letter {
                letter: *letter,
                number: None,
                across_clue: None,
                down_clue: None,
            },
            None => CrosswordCell::Blocked,
        })
        .collect();
    let mut grid = CrosswordGrid::from_cells(layout.size, cells);

    let mut starts: HashMap<Position, (Option<usize>, Option<usize>)> = HashMap::new();
    for (i, placement) in layout.placements.iter().enumerate() {
        let slot = starts.entry(placement.start).or_default();
        match placement.direction {
            ClueDirection::Across => slot.0 = Some(i),
            ClueDirection::Down => slot.1 = Some(i),
        }
    }

    let mut numbers = vec![0_u32; layout.placements.len()];
    let mut next = 1_u32;
    for pos in grid.positions() {
        let Some(&(across, down)) = starts.get(&pos) else {
            continue;
        };
        if let CrosswordCell::Letter { number, .. } = grid.cell_mut(pos) {
            *number = Some(next);
        }
        if let Some(i) = across {
            numbers[i] = next;
        }
        if let Some(i) = down {
            numbers[i] = next;
        }
        next += 1;
    }

    for (i, placement) in layout.placements.iter().enumerate() {
        for pos in placement.positions() {
            if let CrosswordCell::Letter {
                across_clue,
                down_clue,
                ..
            } = grid.cell_mut(pos)
            {
                match placement.direction {
                    ClueDirection::Across => *across_clue = Some(numbers[i]),
                    ClueDirection::Down => *down_clue = Some(numbers[i]),
                }
            }
        }
    }

    let mut clues: Vec<CrosswordClue> = layout
        .placements
        .iter()
        .enumerate()
        .map(|(i, placement)| CrosswordClue {
            number: numbers[i],
            direction: placement.direction,
            clue: words[placement.entry_index].clue.clone(),
            answer: placement.answer.clone(),
            start: placement.start,
            length: placement.length,
        })
        .collect();
    clues.sort_by_key(|clue| (clue.number, matches!(clue.direction, ClueDirection::Down)));

    CrosswordPuzzle {
        grid,
        clues,
        placed_count: layout.placements.len(),
        seed,
    }
}

#[cfg(test)]
mod tests {
    use letterlace_core::DifficultyTier;
    use proptest::prelude::*;

    use super::*;

    const SAMPLE_WORDS: [&str; 12] = [
        "GUITAR", "DRUMS", "BASS", "RIFF", "AMP", "SOLO", "TUNE", "STAGE", "BAND", "TOUR",
        "SONG", "ROCK",
    ];

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, format!("clue for {word}"), "music", DifficultyTier::Medium)
    }

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words.iter().map(|word| entry(word)).collect()
    }

    /// Checks every structural invariant the puzzle promises.
    fn assert_consistent(puzzle: &CrosswordPuzzle) {
        for clue in &puzzle.clues {
            assert_eq!(clue.length, clue.answer.len());
            assert_eq!(puzzle.grid[clue.start].number(), Some(clue.number));

            let positions: Vec<_> = clue.positions().collect();
            assert_eq!(positions.len(), clue.length);
            let read: String = positions
                .iter()
                .map(|&pos| {
                    let cell = puzzle.grid.get(pos).expect("clue path leaves the grid");
                    assert_eq!(cell.clue_number(clue.direction), Some(clue.number));
                    cell.letter().expect("clue path crosses a blocked cell").as_char()
                })
                .collect();
            assert_eq!(read, clue.answer);
        }

        // Every back-tag points at a clue that covers the cell.
        for pos in puzzle.grid.positions() {
            for direction in ClueDirection::ALL {
                let Some(number) = puzzle.grid[pos].clue_number(direction) else {
                    continue;
                };
                let clue = puzzle
                    .clues
                    .iter()
                    .find(|clue| clue.number == number && clue.direction == direction)
                    .expect("back-tag without a matching clue");
                assert!(clue.positions().any(|p| p == pos));
            }
        }
    }

    #[test]
    fn test_sample_words_scenario() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(7, 4));
        let puzzle = generator
            .generate_with_seed(&entries(&SAMPLE_WORDS), PuzzleSeed::from_phrase("rock band"))
            .unwrap();

        assert!(puzzle.placed_count >= 1);
        assert!(puzzle.clues_in(ClueDirection::Across).count() >= 1);
        assert!(puzzle.clues_in(ClueDirection::Down).count() >= 1);
        assert_eq!(puzzle.clues.len(), puzzle.placed_count);
        assert_eq!(puzzle.grid.size(), 7);
        assert_consistent(&puzzle);
    }

    #[test]
    fn test_crossing_words_share_a_number() {
        // CAT and COB only share their first letter, so whichever word
        // seeds the grid, the other must cross at its start cell and the
        // two clues share one number.
        let generator = CrosswordGenerator::new(CrosswordConfig::new(5, 2));
        let puzzle = generator
            .generate_with_seed(&entries(&["CAT", "COB"]), PuzzleSeed::from_phrase("shared"))
            .unwrap();

        assert_eq!(puzzle.placed_count, 2);
        assert_eq!(puzzle.clues.len(), 2);
        assert!(puzzle.clues.iter().all(|clue| clue.number == 1));
        assert_eq!(puzzle.clues_in(ClueDirection::Across).count(), 1);
        assert_eq!(puzzle.clues_in(ClueDirection::Down).count(), 1);

        let start = puzzle.clues[0].start;
        assert_eq!(puzzle.grid[start].clue_number(ClueDirection::Across), Some(1));
        assert_eq!(puzzle.grid[start].clue_number(ClueDirection::Down), Some(1));
        assert_consistent(&puzzle);
    }

    #[test]
    fn test_word_longer_than_grid_fails() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(5, 1));
        let result = generator.generate_with_seed(
            &entries(&["PLAYWRIGHT"]),
            PuzzleSeed::from_phrase("too long"),
        );
        assert_eq!(
            result.unwrap_err(),
            CrosswordError::PlacementFailed { grid_size: 5 }
        );
    }

    #[test]
    fn test_empty_word_list_fails() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(7, 1));
        let result = generator.generate_with_seed(&[], PuzzleSeed::from_phrase("empty"));
        assert!(matches!(
            result,
            Err(CrosswordError::PlacementFailed { grid_size: 7 })
        ));
    }

    #[test]
    fn test_unreachable_min_words_still_returns_best_layout() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(7, 100));
        let puzzle = generator
            .generate_with_seed(&entries(&SAMPLE_WORDS), PuzzleSeed::from_phrase("greedy"))
            .unwrap();
        assert!(puzzle.placed_count >= 1);
        assert!(puzzle.placed_count < 100);
        assert_consistent(&puzzle);
    }

    #[test]
    fn test_numbers_increase_in_row_major_order() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(9, 6));
        let puzzle = generator
            .generate_with_seed(&entries(&SAMPLE_WORDS), PuzzleSeed::from_phrase("numbering"))
            .unwrap();

        let numbers: Vec<u32> = puzzle
            .grid
            .positions()
            .filter_map(|pos| puzzle.grid[pos].number())
            .collect();
        let expected: Vec<u32> = (1..).take(numbers.len()).collect();
        assert_eq!(numbers, expected);
        assert_consistent(&puzzle);
    }

    #[test]
    fn test_same_seed_reproduces_puzzle() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(9, 6));
        let words = entries(&SAMPLE_WORDS);
        let seed = PuzzleSeed::from_phrase("reproducible");
        let first = generator.generate_with_seed(&words, seed).unwrap();
        let second = generator.generate_with_seed(&words, seed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_words_collapse_to_one_placement() {
        let generator = CrosswordGenerator::new(CrosswordConfig::new(5, 1));
        let puzzle = generator
            .generate_with_seed(
                &entries(&["CAT", "cat", "CAT"]),
                PuzzleSeed::from_phrase("dupes"),
            )
            .unwrap();
        assert_eq!(puzzle.placed_count, 1);
        assert_consistent(&puzzle);
    }

    proptest! {
        #[test]
        fn prop_generated_puzzles_are_consistent(
            words in prop::collection::vec("[A-Z]{3,6}", 1..10),
        ) {
            let entries: Vec<_> = words.iter().map(|word| entry(word)).collect();
            let generator = CrosswordGenerator::new(CrosswordConfig::new(9, entries.len()));
            // Every candidate fits a 9x9 grid, so the seed word always
            // places and generation cannot fail.
            let puzzle = generator.generate(&entries).unwrap();
            prop_assert!(puzzle.placed_count >= 1);
            assert_consistent(&puzzle);
        }
    }
}
