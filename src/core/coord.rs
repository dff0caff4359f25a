use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the 8×8 board, addressed by `(row, col)`.
///
/// Row 0 is Black's back rank and row 7 is White's back rank; column 0 is the
/// a-file. [`Coord::new`] and [`Coord::offset`] only ever produce on-board
/// squares; deserialized values are checked when a setup is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

/// A `(row, col)` displacement. Unlike [`Coord`] it may point anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub dr: i8,
    pub dc: i8,
}

impl Step {
    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }
}

impl Coord {
    /// Panics if `(row, col)` lies outside the board: handing the engine an
    /// off-board square is a caller bug, not a recoverable condition.
    #[inline]
    pub fn new(row: i8, col: i8) -> Self {
        assert!(
            Self::in_bounds(row, col),
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
    }

    /// The square `step` away, or `None` if that falls off the board.
    #[inline]
    pub fn offset(self, step: Step) -> Option<Coord> {
        let row = self.row + step.dr;
        let col = self.col + step.dc;
        Self::in_bounds(row, col).then_some(Coord { row, col })
    }

    /// Index into a row-major 64-entry table.
    #[inline]
    pub fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl Add<Step> for Coord {
    type Output = Option<Coord>;

    #[inline]
    fn add(self, rhs: Step) -> Self::Output {
        self.offset(rhs)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8 king steps around a square.
pub const KING_STEPS: [Step; 8] = [
    Step { dr: -1, dc: -1 },
    Step { dr: -1, dc: 0 },
    Step { dr: -1, dc: 1 },
    Step { dr: 0, dc: -1 },
    Step { dr: 0, dc: 1 },
    Step { dr: 1, dc: -1 },
    Step { dr: 1, dc: 0 },
    Step { dr: 1, dc: 1 },
];
