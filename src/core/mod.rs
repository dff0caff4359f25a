//! Low-level board primitives.
//!
//! - [`coord`]: on-board `(row, col)` coordinates, steps and the king step set.
//! - [`square`]: one grid cell, occupied exactly when it holds a piece id.
//! - [`board`]: the 8×8 grid, the piece arena and the side-indexed king table.

pub mod board;
pub mod coord;
pub mod square;
