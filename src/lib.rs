//! A rules engine for standard chess: board state, legal moves under the full
//! rule set (check, castling, en passant, promotion), turn order and the end of
//! the game.
//!
//! Rendering, input translation and menus are left to the caller, which talks
//! to a [`Game`] through its queries and mutating calls.

pub mod chess;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

pub use crate::chess::config::{GameConfig, Placement, Setup};
pub use crate::chess::piece::{Piece, PieceId, PieceKind, Side};
pub use crate::core::board::Board;
pub use crate::core::coord::Coord;
pub use crate::error::{MoveError, PromotionError, SetupError};
pub use crate::game::{Game, GamePhase, GameStatus, MoveKind, MoveRecord, Snapshot, Winner};
