//! Piece vocabulary and game setup.

pub mod config;
pub mod layout;
pub mod piece;
