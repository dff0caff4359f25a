#![allow(dead_code)]

use classic_chess::{Coord, Game, MoveRecord, PieceKind, Placement, Side};

/// "e2" -> (6, 4).
pub fn sq(name: &str) -> Coord {
    let b = name.as_bytes();
    assert_eq!(b.len(), 2, "bad square name {name}");
    let col = (b[0] - b'a') as i8;
    let row = 8 - (b[1] - b'0') as i8;
    Coord::new(row, col)
}

pub fn mv(game: &mut Game, from: &str, to: &str) -> MoveRecord {
    game.attempt_move_from(sq(from), sq(to))
        .unwrap_or_else(|e| panic!("{from}-{to} rejected: {e}"))
}

pub fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        mv(game, from, to);
    }
}

pub fn at(kind: PieceKind, side: Side, name: &str) -> Placement {
    Placement::new(kind, side, sq(name))
}
