use serde::{Deserialize, Serialize};

use crate::chess::piece::{PieceId, Side};
use crate::core::board::Board;
use crate::core::coord::Coord;

use super::attacks::is_in_check;
use super::legality::legal_moves;

/// How a finished game ended, seen from the side that could not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    Checkmate,
    Stalemate,
}

/// Utility: does `side` have *any* legal move?
///
/// `en_passant` must be the live target so an en-passant escape is seen.
pub fn has_any_legal_move(board: &mut Board, side: Side, en_passant: Option<Coord>) -> bool {
    let ids: Vec<PieceId> = board.pieces_of(side).map(|p| p.id()).collect();
    ids.into_iter()
        .any(|id| !legal_moves(board, id, en_passant).is_empty())
}

/// True if `side` (to move) is in check with no legal move.
pub fn is_checkmate(board: &mut Board, side: Side, en_passant: Option<Coord>) -> bool {
    is_in_check(board, side) && !has_any_legal_move(board, side, en_passant)
}

/// True if `side` (to move) is not in check but has no legal move.
pub fn is_stalemate(board: &mut Board, side: Side, en_passant: Option<Coord>) -> bool {
    !is_in_check(board, side) && !has_any_legal_move(board, side, en_passant)
}

/// Terminal status for the side to move, or `None` if play continues.
pub fn evaluate(board: &mut Board, to_move: Side, en_passant: Option<Coord>) -> Option<Terminal> {
    if has_any_legal_move(board, to_move, en_passant) {
        return None;
    }
    if is_in_check(board, to_move) {
        Some(Terminal::Checkmate)
    } else {
        Some(Terminal::Stalemate)
    }
}
