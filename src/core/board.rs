use std::fmt;

use crate::chess::layout::StandardLayout;
use crate::chess::piece::{Piece, PieceId, PieceKind, Side};
use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::square::Square;

/// The 8×8 grid together with the pieces standing on it.
///
/// Pieces live in an arena indexed by [`PieceId`]; a captured piece leaves a
/// `None` slot behind so ids stay stable. Each side's king is tracked in a
/// side-indexed table so check detection never has to search for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Square; 64],
    pieces: Vec<Option<Piece>>,
    kings: [Option<PieceId>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Square::EMPTY; 64],
            pieces: Vec::with_capacity(32),
            kings: [None; 2],
        }
    }

    /// The standard initial position, all 32 pieces unmoved.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (kind, side, coord) in StandardLayout::placements() {
            board.place(kind, side, coord, 0);
        }
        board
    }

    /// Put a new piece on an empty square.
    ///
    /// Panics if the square is taken; setup code validates placements first.
    pub(crate) fn place(&mut self, kind: PieceKind, side: Side, coord: Coord, move_count: u32) -> PieceId {
        assert!(
            !self.cells[coord.index()].is_occupied(),
            "square {coord} is already occupied"
        );
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Some(Piece {
            id,
            kind,
            side,
            coord,
            move_count,
        }));
        self.cells[coord.index()] = Square::holding(id);
        if kind == PieceKind::King {
            self.kings[side.index()] = Some(id);
        }
        id
    }

    #[inline]
    pub fn square(&self, coord: Coord) -> Square {
        self.cells[coord.index()]
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.square(coord).is_occupied()
    }

    /// The live piece with this id, if it has not been captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0 as usize).and_then(Option::as_ref)
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.square(coord).piece().and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn king(&self, side: Side) -> Option<&Piece> {
        self.kings[side.index()].and_then(|id| self.piece(id))
    }

    /// Every live piece, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    /// The live pieces of one side.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.side == side)
    }

    /// Pieces reachable from the grid, in row-major order.
    ///
    /// Differs from [`Board::pieces`] only while a legality simulation has
    /// lifted a captured piece off its cell.
    pub fn occupants(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells
            .iter()
            .filter_map(|sq| sq.piece())
            .filter_map(|id| self.piece(id))
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// Empty a cell without touching the arena.
    #[inline]
    pub(crate) fn lift(&mut self, coord: Coord) -> Option<PieceId> {
        self.cells[coord.index()].take()
    }

    /// Overwrite a cell without touching the arena.
    #[inline]
    pub(crate) fn set_cell(&mut self, coord: Coord, id: Option<PieceId>) {
        self.cells[coord.index()].set(id);
    }

    #[inline]
    pub(crate) fn set_coord(&mut self, id: PieceId, coord: Coord) {
        if let Some(p) = self.piece_mut(id) {
            p.coord = coord;
        }
    }

    /// Move a piece to an empty cell, keeping grid and piece in agreement.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Coord) {
        let Some(from) = self.piece(id).map(Piece::coord) else {
            return;
        };
        debug_assert!(!self.is_occupied(to), "relocating onto occupied {to}");
        self.lift(from);
        self.set_cell(to, Some(id));
        self.set_coord(id, to);
    }

    /// Remove whatever stands on `coord` from the grid and the arena.
    pub(crate) fn capture(&mut self, coord: Coord) -> Option<Piece> {
        let id = self.lift(coord)?;
        self.pieces.get_mut(id.0 as usize).and_then(Option::take)
    }

    pub(crate) fn bump_move_count(&mut self, id: PieceId) {
        if let Some(p) = self.piece_mut(id) {
            p.move_count += 1;
        }
    }

    /// Swap the piece `id` for a freshly created piece of `kind` on the same
    /// square and side. Returns the new id.
    pub(crate) fn replace(&mut self, id: PieceId, kind: PieceKind) -> Option<PieceId> {
        let old = self.piece(id)?.clone();
        self.capture(old.coord);
        Some(self.place(kind, old.side, old.coord, old.move_count))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = self
                    .piece_at(Coord::new(row, col))
                    .map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
