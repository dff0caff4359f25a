use crate::chess::piece::{PieceKind, Side};
use crate::core::coord::{Coord, BOARD_SIZE};

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard starting placement.
#[derive(Debug, Clone, Copy)]
pub struct StandardLayout;

impl StandardLayout {
    /// All 32 placements in a fixed, predictable order:
    ///
    /// White pawns, Black pawns, then each side's back rank a..h.
    pub fn placements() -> Vec<(PieceKind, Side, Coord)> {
        let mut out = Vec::with_capacity(32);
        for side in Side::BOTH {
            let row = side.back_row() + side.pawn_direction();
            for col in 0..BOARD_SIZE {
                out.push((PieceKind::Pawn, side, Coord::new(row, col)));
            }
        }
        for side in Side::BOTH {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                out.push((kind, side, Coord::new(side.back_row(), col as i8)));
            }
        }
        out
    }
}
