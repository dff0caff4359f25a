//! Rule functions over a [`crate::core::board::Board`].
//!
//! - [`movegen`]: pseudo-legal destinations per piece kind.
//! - [`attacks`]: check detection.
//! - [`legality`]: simulate / check / roll back filtering of pseudo-legal moves.
//! - [`castling`], [`en_passant`], [`promotion`]: the special moves.
//! - [`checkmate`]: terminal detection for the side to move.
//!
//! Everything here takes the board and the en-passant target as explicit
//! arguments; none of it knows whose turn it is.

pub mod attacks;
pub mod castling;
pub mod checkmate;
pub mod en_passant;
pub mod legality;
pub mod movegen;
pub mod promotion;
