//! Castling.
//!
//! The king proposes a castle as a two-square king move toward an unmoved rook
//! on the same row. Availability is decided without touching the board for
//! the static conditions, then by simulating the king onto each square it
//! crosses. The joint king + rook transition in [`perform`] only runs once the
//! game has confirmed the move.

use tracing::trace;

use crate::chess::piece::{PieceId, PieceKind};
use crate::core::board::Board;
use crate::core::coord::{Coord, Step, BOARD_SIZE};

use super::attacks::is_in_check;
use super::legality::Simulation;

/// A castle that satisfies the static preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePlan {
    pub king: PieceId,
    pub rook: PieceId,
    pub king_from: Coord,
    pub king_to: Coord,
    pub rook_from: Coord,
    pub rook_to: Coord,
}

impl CastlePlan {
    /// Squares the king crosses, destination included.
    pub fn king_path(&self) -> impl Iterator<Item = Coord> {
        let dir = (self.king_to.col - self.king_from.col).signum();
        let from = self.king_from;
        (1..=2).filter_map(move |i| from + Step::new(0, dir * i))
    }
}

/// Column every king starts on.
pub const KING_HOME_COL: i8 = 4;

/// Match `king -> to` against a castle and check everything that does not
/// need an attack probe: the king unmoved on its home square, the rook unmoved
/// on the corner the king heads for, both on the same side, nothing standing
/// between them.
pub fn castle_plan(board: &Board, king: PieceId, to: Coord) -> Option<CastlePlan> {
    let k = board.piece(king)?;
    if k.kind() != PieceKind::King || k.has_moved() {
        return None;
    }
    let from = k.coord();
    if from != Coord::new(k.side().back_row(), KING_HOME_COL) {
        return None;
    }
    let dc = to.col - from.col;
    if to.row != from.row || dc.abs() != 2 {
        return None;
    }
    let dir = dc.signum();
    let rook_col = if dir > 0 { BOARD_SIZE - 1 } else { 0 };
    let rook_from = Coord::new(from.row, rook_col);

    let r = board.piece_at(rook_from)?;
    if r.kind() != PieceKind::Rook || r.side() != k.side() || r.has_moved() {
        return None;
    }

    let (lo, hi) = if dir > 0 { (from.col, rook_col) } else { (rook_col, from.col) };
    if (lo + 1..hi).any(|col| board.is_occupied(Coord::new(from.row, col))) {
        return None;
    }

    Some(CastlePlan {
        king,
        rook: r.id(),
        king_from: from,
        king_to: to,
        rook_from,
        rook_to: Coord::new(from.row, to.col - dir),
    })
}

/// True iff the king is not in check now and would not be on any square of
/// its path.
pub fn king_path_is_safe(board: &mut Board, plan: &CastlePlan) -> bool {
    let Some(side) = board.piece(plan.king).map(|k| k.side()) else {
        return false;
    };
    if is_in_check(board, side) {
        trace!(king = %plan.king, "cannot castle out of check");
        return false;
    }
    for sq in plan.king_path() {
        let attacked = match Simulation::apply(board, plan.king, sq, None) {
            Some(sim) => is_in_check(sim.board(), side),
            None => true,
        };
        if attacked {
            trace!(king = %plan.king, %sq, "castling path is attacked");
            return false;
        }
    }
    true
}

/// A castle from `king -> to` that may be played right now.
pub fn available_castle(board: &mut Board, king: PieceId, to: Coord) -> Option<CastlePlan> {
    let plan = castle_plan(board, king, to)?;
    king_path_is_safe(board, &plan).then_some(plan)
}

/// King destinations of every castle available right now.
pub fn castle_destinations(board: &mut Board, king: PieceId) -> Vec<Coord> {
    let Some(from) = board.piece(king).map(|k| k.coord()) else {
        return Vec::new();
    };
    [-2, 2]
        .into_iter()
        .filter_map(|dc| from + Step::new(0, dc))
        .filter(|&to| available_castle(board, king, to).is_some())
        .collect()
}

/// Commit a confirmed castle: king and rook move together and each counts one
/// move.
pub(crate) fn perform(board: &mut Board, plan: &CastlePlan) {
    board.relocate(plan.king, plan.king_to);
    board.relocate(plan.rook, plan.rook_to);
    board.bump_move_count(plan.king);
    board.bump_move_count(plan.rook);
}
