//! Error types for classic_chess
//!
//! An `Err` from a mutating call always means the game was left exactly as it
//! was before the call.

use thiserror::Error;

use crate::chess::piece::{PieceId, PieceKind, Side};
use crate::core::coord::Coord;

/// Why a move attempt was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no live piece with id {0}")]
    NoSuchPiece(PieceId),

    #[error("the game is over")]
    GameOver,

    #[error("a promotion must be resolved before the next move")]
    PromotionPending,

    #[error("it is {turn}'s turn, piece {piece} belongs to {side}")]
    NotYourTurn { piece: PieceId, side: Side, turn: Side },

    #[error("{from} -> {to} is not a legal move")]
    IllegalDestination { from: Coord, to: Coord },
}

/// Why a promotion choice was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no promotion is pending")]
    NotPending,

    #[error("a pawn cannot promote to {0:?}")]
    InvalidChoice(PieceKind),
}

/// Why a custom setup could not be turned into a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{0} has no king")]
    MissingKing(Side),

    #[error("{0} has more than one king")]
    DuplicateKing(Side),

    #[error("square {0} is off the board")]
    OffBoard(Coord),

    #[error("square {0} is used twice")]
    SquareTaken(Coord),

    #[error("pawn on {0} stands on a back row")]
    PawnOnBackRank(Coord),

    #[error("en passant target {0} is not behind a pawn that just advanced two squares")]
    BadEnPassantTarget(Coord),
}
