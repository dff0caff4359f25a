//! En passant.
//!
//! A pawn's two-square advance leaves the skipped square behind as the
//! en-passant target. The target lives for exactly one opposing move: the game
//! overwrites or clears it on every commit.

use crate::chess::piece::{Piece, PieceKind, Side};
use crate::core::board::Board;
use crate::core::coord::Coord;

/// The square a pawn skipped, if `from -> to` is a two-square advance.
pub fn skipped_square(pawn: &Piece, from: Coord, to: Coord) -> Option<Coord> {
    if pawn.kind() != PieceKind::Pawn || from.col != to.col || (to.row - from.row).abs() != 2 {
        return None;
    }
    Some(Coord::new((from.row + to.row) / 2, from.col))
}

/// Where the pawn captured by an en-passant move onto `target` stands: one row
/// behind the target, seen from the capturer.
pub fn victim_square(capturer: Side, target: Coord) -> Option<Coord> {
    let row = target.row - capturer.pawn_direction();
    Coord::in_bounds(row, target.col).then(|| Coord::new(row, target.col))
}

/// True iff moving `pawn` diagonally onto `to` is an en-passant capture under
/// the live target.
pub fn is_en_passant_capture(board: &Board, pawn: &Piece, to: Coord, target: Option<Coord>) -> bool {
    if pawn.kind() != PieceKind::Pawn || target != Some(to) || board.is_occupied(to) {
        return false;
    }
    let from = pawn.coord();
    if to.row - from.row != pawn.side().pawn_direction() || (to.col - from.col).abs() != 1 {
        return false;
    }
    victim_square(pawn.side(), to)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|victim| victim.kind() == PieceKind::Pawn && victim.side() != pawn.side())
}
