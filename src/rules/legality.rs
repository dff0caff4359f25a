//! Legality filter.
//!
//! A pseudo-legal move is kept only if, once played, the mover's king is not
//! attacked. The move is played in place on the board through a
//! [`Simulation`] guard, which puts every touched cell and piece back when it
//! goes out of scope, whatever path the caller leaves by.

use tracing::trace;

use crate::chess::piece::{PieceId, PieceKind};
use crate::core::board::Board;
use crate::core::coord::Coord;

use super::attacks::is_in_check;
use super::castling::castle_destinations;
use super::en_passant::{is_en_passant_capture, victim_square};
use super::movegen::pseudo_legal_moves;

/// A provisional move applied to a board. Dropping it rolls the board back.
pub(crate) struct Simulation<'b> {
    board: &'b mut Board,
    mover: PieceId,
    from: Coord,
    to: Coord,
    displaced: Option<PieceId>,
    lifted: Option<(Coord, PieceId)>,
}

impl<'b> Simulation<'b> {
    /// Move `mover` onto `to`, also lifting whatever stands on `lift` (the
    /// pawn taken en passant). Returns `None` for an unknown piece.
    pub(crate) fn apply(board: &'b mut Board, mover: PieceId, to: Coord, lift: Option<Coord>) -> Option<Self> {
        let from = board.piece(mover)?.coord();
        debug_assert_ne!(from, to, "simulating a null move");

        let lifted = lift.and_then(|sq| board.lift(sq).map(|id| (sq, id)));
        let displaced = board.lift(to);
        board.lift(from);
        board.set_cell(to, Some(mover));
        board.set_coord(mover, to);

        Some(Self {
            board,
            mover,
            from,
            to,
            displaced,
            lifted,
        })
    }

    #[inline]
    pub(crate) fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.set_cell(self.to, self.displaced);
        if let Some((sq, id)) = self.lifted {
            self.board.set_cell(sq, Some(id));
        }
        self.board.set_cell(self.from, Some(self.mover));
        self.board.set_coord(self.mover, self.from);
    }
}

/// True iff playing `id` onto `to` leaves its own king unattacked.
///
/// Does not check that the move is pseudo-legal.
pub fn leaves_king_safe(board: &mut Board, id: PieceId, to: Coord, en_passant: Option<Coord>) -> bool {
    let Some(piece) = board.piece(id) else {
        return false;
    };
    let side = piece.side();
    let lift = if is_en_passant_capture(board, piece, to, en_passant) {
        victim_square(side, to)
    } else {
        None
    };

    match Simulation::apply(board, id, to, lift) {
        Some(sim) => !is_in_check(sim.board(), side),
        None => false,
    }
}

/// Legal destinations of the piece `id`: its pseudo-legal moves, plus castling
/// for an unmoved king, minus anything that leaves its own king in check.
///
/// The board is mutated only transiently and is identical on return.
pub fn legal_moves(board: &mut Board, id: PieceId, en_passant: Option<Coord>) -> Vec<Coord> {
    let Some(piece) = board.piece(id) else {
        return Vec::new();
    };
    let is_king = piece.kind() == PieceKind::King;

    let mut candidates = pseudo_legal_moves(board, id, en_passant);
    if is_king {
        candidates.extend(castle_destinations(board, id));
    }
    candidates.retain(|&to| {
        let safe = leaves_king_safe(board, id, to, en_passant);
        if !safe {
            trace!(piece = %id, %to, "move exposes own king");
        }
        safe
    });
    candidates
}

/// True iff `to` is among [`legal_moves`] for `id`.
pub fn is_legal_move(board: &mut Board, id: PieceId, to: Coord, en_passant: Option<Coord>) -> bool {
    legal_moves(board, id, en_passant).contains(&to)
}
