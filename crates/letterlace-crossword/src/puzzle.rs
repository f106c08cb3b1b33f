//! Crossword puzzle output types.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use letterlace_core::{Direction, Letter, Position, PuzzleSeed};

/// The reading direction of a crossword clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueDirection {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl ClueDirection {
    /// Array containing both clue directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the equivalent placement direction.
    #[must_use]
    pub const fn as_direction(self) -> Direction {
        match self {
            Self::Across => Direction::Right,
            Self::Down => Direction::Down,
        }
    }

    /// The direction from a word's start toward the cell just before it.
    pub(crate) const fn reversed(self) -> Direction {
        match self {
            Self::Across => Direction::Left,
            Self::Down => Direction::Up,
        }
    }

    /// The two directions perpendicular to the reading axis.
    pub(crate) const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Self::Across => [Direction::Up, Direction::Down],
            Self::Down => [Direction::Left, Direction::Right],
        }
    }
}

impl Display for ClueDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => f.write_str("across"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// A single crossword grid cell.
///
/// Every cell in a returned grid is either blocked (non-playable) or holds
/// a letter together with its derived metadata: the clue number printed in
/// the cell, if a word starts there, and the numbers of the across and down
/// words covering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrosswordCell {
    /// A non-playable square.
    Blocked,
    /// A playable square holding a letter.
    Letter {
        /// The solution letter.
        letter: Letter,
        /// Clue number printed in this cell; set only on word-start cells.
        number: Option<u32>,
        /// Number of the across word covering this cell, if any.
        across_clue: Option<u32>,
        /// Number of the down word covering this cell, if any.
        down_clue: Option<u32>,
    },
}

impl CrosswordCell {
    /// Returns `true` for non-playable squares.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Returns the solution letter of a playable square.
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        match self {
            Self::Blocked => None,
            Self::Letter { letter, .. } => Some(*letter),
        }
    }

    /// Returns the clue number printed in this cell.
    #[must_use]
    pub const fn number(&self) -> Option<u32> {
        match self {
            Self::Blocked => None,
            Self::Letter { number, .. } => *number,
        }
    }

    /// Returns the number of the covering clue in the given direction.
    #[must_use]
    pub const fn clue_number(&self, direction: ClueDirection) -> Option<u32> {
        match (self, direction) {
            (Self::Blocked, _) => None,
            (Self::Letter { across_clue, .. }, ClueDirection::Across) => *across_clue,
            (Self::Letter { down_clue, .. }, ClueDirection::Down) => *down_clue,
        }
    }
}

/// A square grid of [`CrosswordCell`]s.
///
/// Every cell is defined as letter-or-blocked; a returned grid is never
/// partially initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordGrid {
    size: usize,
    cells: Vec<CrosswordCell>,
}

impl CrosswordGrid {
    pub(crate) fn from_cells(size: usize, cells: Vec<CrosswordCell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Returns the grid's side length.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the position lies within the grid.
    #[must_use]
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the cell at the given position, or `None` when out of
    /// bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&CrosswordCell> {
        self.contains(pos)
            .then(|| &self.cells[pos.row * self.size + pos.col])
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut CrosswordCell {
        &mut self.cells[pos.row * self.size + pos.col]
    }
}

impl Index<Position> for CrosswordGrid {
    type Output = CrosswordCell;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "position {pos} out of bounds");
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl Display for CrosswordGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self[Position::new(row, col)].letter() {
                    Some(letter) => write!(f, "{letter}")?,
                    None => f.write_str("#")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A numbered crossword clue.
///
/// Reading the grid letters along the clue's path reproduces `answer`
/// exactly, and `length == answer.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordClue {
    /// Clue number, assigned in row-major scan order over word-start cells.
    pub number: u32,
    /// Reading direction.
    pub direction: ClueDirection,
    /// Clue text from the word's entry.
    pub clue: String,
    /// The answer word, uppercase A-Z.
    pub answer: String,
    /// Position of the answer's first letter.
    pub start: Position,
    /// Answer length in letters.
    pub length: usize,
}

impl CrosswordClue {
    /// Returns the grid positions covered by this clue, first letter first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (start, direction, len) = (self.start, self.direction.as_direction(), self.length);
        (0..len).map_while(move |i| start.offset(direction, i))
    }
}

/// A generated crossword puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordPuzzle {
    /// The finished cell grid.
    pub grid: CrosswordGrid,
    /// All clues, ordered by number with across before down.
    pub clues: Vec<CrosswordClue>,
    /// Number of words placed into the grid.
    pub placed_count: usize,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

impl CrosswordPuzzle {
    /// Returns the clues reading in the given direction, in number order.
    pub fn clues_in(&self, direction: ClueDirection) -> impl Iterator<Item = &CrosswordClue> {
        self.clues
            .iter()
            .filter(move |clue| clue.direction == direction)
    }
}
