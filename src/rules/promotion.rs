use crate::chess::piece::{Piece, PieceId, PieceKind};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::PromotionError;

/// True iff `piece` landing on `to` is a pawn reaching the far row.
#[inline]
pub fn reaches_last_row(piece: &Piece, to: Coord) -> bool {
    piece.kind() == PieceKind::Pawn && to.row == piece.side().promotion_row()
}

/// Only Rook, Knight, Bishop and Queen are valid replacements.
pub fn validate_choice(kind: PieceKind) -> Result<PieceKind, PromotionError> {
    if kind.is_promotion_choice() {
        Ok(kind)
    } else {
        Err(PromotionError::InvalidChoice(kind))
    }
}

/// Rebind the pawn's cell to a new piece of `kind`. Returns the new id.
pub(crate) fn promote(board: &mut Board, pawn: PieceId, kind: PieceKind) -> Result<PieceId, PromotionError> {
    let kind = validate_choice(kind)?;
    board.replace(pawn, kind).ok_or(PromotionError::NotPending)
}
