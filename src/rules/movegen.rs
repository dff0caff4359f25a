use crate::chess::piece::{Piece, PieceId, PieceKind, KNIGHT_DELTAS};
use crate::core::board::Board;
use crate::core::coord::{Coord, Step, KING_STEPS};

use super::en_passant;

/// Pseudo-legal destinations of the piece `id`.
///
/// Movement geometry, blocking and the no-own-capture rule are applied; whether
/// the move leaves the mover's own king in check is not. `en_passant` is the
/// live en-passant target, if any. Castling destinations are not included here
/// since they need attack probes on a mutable board; see
/// [`super::castling::castle_destinations`].
///
/// A captured (unknown) id has no moves.
pub fn pseudo_legal_moves(board: &Board, id: PieceId, en_passant: Option<Coord>) -> Vec<Coord> {
    let Some(piece) = board.piece(id) else {
        return Vec::new();
    };
    let mut out = Vec::new();

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, piece, en_passant, &mut out),
        PieceKind::Knight => step_moves(board, piece, &KNIGHT_DELTAS, &mut out),
        PieceKind::King => step_moves(board, piece, &KING_STEPS, &mut out),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            slide_moves(board, piece, piece.kind().slide_dirs(), &mut out)
        }
    }

    out
}

fn pawn_moves(board: &Board, pawn: &Piece, en_passant: Option<Coord>, out: &mut Vec<Coord>) {
    let from = pawn.coord();
    let dir = pawn.side().pawn_direction();
    let forward = Step::new(dir, 0);

    if let Some(one) = from + forward {
        if !board.is_occupied(one) {
            out.push(one);
            if !pawn.has_moved() {
                if let Some(two) = one + forward {
                    if !board.is_occupied(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from + Step::new(dir, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.side() != pawn.side() => out.push(to),
            Some(_) => {}
            None => {
                if en_passant::is_en_passant_capture(board, pawn, to, en_passant) {
                    out.push(to);
                }
            }
        }
    }
}

/// Knights and kings: fixed offsets, anything but an own piece.
fn step_moves(board: &Board, piece: &Piece, steps: &[Step], out: &mut Vec<Coord>) {
    for &step in steps {
        let Some(to) = piece.coord() + step else {
            continue;
        };
        match board.piece_at(to) {
            Some(other) if other.side() == piece.side() => {}
            _ => out.push(to),
        }
    }
}

/// Ray-cast until the edge, an own piece (excluded) or an enemy (included).
fn slide_moves(board: &Board, piece: &Piece, dirs: &[Step], out: &mut Vec<Coord>) {
    for &dir in dirs {
        let mut cur = piece.coord();
        while let Some(to) = cur + dir {
            match board.piece_at(to) {
                None => out.push(to),
                Some(other) => {
                    if other.side() != piece.side() {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
