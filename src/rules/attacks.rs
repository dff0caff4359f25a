use crate::chess::piece::{Piece, PieceKind, Side, BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::core::board::Board;
use crate::core::coord::{Coord, Step};

/// True iff some piece of the side opposing `side` attacks `target`.
///
/// Only pieces reachable from the grid count, so a piece lifted off its cell
/// by a legality simulation does not attack.
pub fn is_square_attacked(board: &Board, side: Side, target: Coord) -> bool {
    let enemy = side.other();
    board
        .occupants()
        .filter(|p| p.side() == enemy)
        .any(|p| piece_attacks(board, p, target))
}

/// True iff `side`'s king stands on an attacked square.
///
/// A board without a king for `side` is never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    match board.king(side) {
        Some(king) => is_square_attacked(board, side, king.coord()),
        None => false,
    }
}

/// Does `piece` attack `target`?
///
/// This is the capture geometry of each kind. For a square holding an enemy
/// piece it agrees with the pseudo-legal move set; pawns attack diagonally
/// whether or not the square is occupied, and castling never attacks.
pub fn piece_attacks(board: &Board, piece: &Piece, target: Coord) -> bool {
    let from = piece.coord();
    if from == target {
        return false;
    }
    let dr = target.row - from.row;
    let dc = target.col - from.col;

    match piece.kind() {
        PieceKind::Pawn => dr == piece.side().pawn_direction() && dc.abs() == 1,
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
        PieceKind::Knight => {
            let ar = dr.abs();
            let ac = dc.abs();
            (ar == 2 && ac == 1) || (ar == 1 && ac == 2)
        }
        PieceKind::Rook => rider_attacks(board, from, target, &ROOK_DIRS),
        PieceKind::Bishop => rider_attacks(board, from, target, &BISHOP_DIRS),
        PieceKind::Queen => rider_attacks(board, from, target, &QUEEN_DIRS),
    }
}

fn rider_attacks(board: &Board, from: Coord, target: Coord, dirs: &[Step]) -> bool {
    let Some(dir) = normalized_dir(from, target) else {
        return false;
    };
    if !dirs.contains(&dir) {
        return false;
    }

    // Blockers: any occupied square strictly between `from` and `target`.
    let mut cur = from;
    loop {
        cur = match cur + dir {
            Some(next) => next,
            None => return false,
        };
        if cur == target {
            return true;
        }
        if board.is_occupied(cur) {
            return false;
        }
    }
}

/// Unit step from `from` toward `to` if they share a line or diagonal.
#[inline]
fn normalized_dir(from: Coord, to: Coord) -> Option<Step> {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    if dr == 0 && dc == 0 {
        return None;
    }
    if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
        Some(Step::new(dr.signum(), dc.signum()))
    } else {
        None
    }
}
