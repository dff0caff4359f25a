use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Coord, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Step] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    /// Kinds a pawn may turn into on the last row.
    #[inline]
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen
        )
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Index for side-keyed tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta of a pawn step: White moves toward row 0.
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    #[inline]
    pub fn back_row(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// The row on which this side's pawns promote.
    #[inline]
    pub fn promotion_row(self) -> i8 {
        self.other().back_row()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Handle of a piece inside a [`crate::core::board::Board`].
///
/// Ids are never reused within a game: a promoted pawn's replacement gets a
/// fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live piece.
///
/// `coord` always names the cell that holds this piece, except inside a
/// legality simulation. Fields are only mutated by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) side: Side,
    pub(crate) coord: Coord,
    pub(crate) move_count: u32,
}

impl Piece {
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Upper-case for White, lower-case for Black.
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }
}

pub const ROOK_DIRS: [Step; 4] = [
    Step { dr: 1, dc: 0 },
    Step { dr: -1, dc: 0 },
    Step { dr: 0, dc: 1 },
    Step { dr: 0, dc: -1 },
];

pub const BISHOP_DIRS: [Step; 4] = [
    Step { dr: 1, dc: 1 },
    Step { dr: 1, dc: -1 },
    Step { dr: -1, dc: 1 },
    Step { dr: -1, dc: -1 },
];

pub const QUEEN_DIRS: [Step; 8] = [
    Step { dr: 1, dc: 0 },
    Step { dr: -1, dc: 0 },
    Step { dr: 0, dc: 1 },
    Step { dr: 0, dc: -1 },
    Step { dr: 1, dc: 1 },
    Step { dr: 1, dc: -1 },
    Step { dr: -1, dc: 1 },
    Step { dr: -1, dc: -1 },
];

pub const KNIGHT_DELTAS: [Step; 8] = [
    Step { dr: -2, dc: -1 },
    Step { dr: -2, dc: 1 },
    Step { dr: -1, dc: -2 },
    Step { dr: -1, dc: 2 },
    Step { dr: 1, dc: -2 },
    Step { dr: 1, dc: 2 },
    Step { dr: 2, dc: -1 },
    Step { dr: 2, dc: 1 },
];
