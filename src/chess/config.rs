use serde::{Deserialize, Serialize};

use crate::chess::piece::{PieceKind, Side};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::SetupError;

/// One piece of a custom setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub side: Side,
    pub coord: Coord,
    /// Non-zero marks the piece as already moved (no double step, no castling).
    #[serde(default)]
    pub move_count: u32,
}

impl Placement {
    pub fn new(kind: PieceKind, side: Side, coord: Coord) -> Self {
        Self {
            kind,
            side,
            coord,
            move_count: 0,
        }
    }

    pub fn moved(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Setup {
    #[default]
    Standard,
    Custom(Vec<Placement>),
}

/// How a game starts. Kept as plain data so it can also be loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    pub first_to_move: Side,
    pub setup: Setup,
    /// Only meaningful for custom setups that start right after a double step.
    #[serde(default)]
    pub en_passant_target: Option<Coord>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            first_to_move: Side::White,
            setup: Setup::Standard,
            en_passant_target: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom(placements: Vec<Placement>) -> Self {
        Self {
            name: "custom".to_string(),
            setup: Setup::Custom(placements),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_first_to_move(mut self, side: Side) -> Self {
        self.first_to_move = side;
        self
    }

    pub fn with_en_passant_target(mut self, target: Option<Coord>) -> Self {
        self.en_passant_target = target;
        self
    }

    /// Build the starting board, rejecting setups the rules cannot work with.
    pub fn build_board(&self) -> Result<Board, SetupError> {
        let board = match &self.setup {
            Setup::Standard => Board::standard(),
            Setup::Custom(placements) => custom_board(placements)?,
        };
        if let Some(target) = self.en_passant_target {
            check_en_passant_target(&board, self.first_to_move, target)?;
        }
        Ok(board)
    }
}

fn custom_board(placements: &[Placement]) -> Result<Board, SetupError> {
    let mut seen = [false; 64];
    let mut kings = [0usize; 2];
    for p in placements {
        if !Coord::in_bounds(p.coord.row, p.coord.col) {
            return Err(SetupError::OffBoard(p.coord));
        }
        if std::mem::replace(&mut seen[p.coord.index()], true) {
            return Err(SetupError::SquareTaken(p.coord));
        }
        match p.kind {
            PieceKind::King => kings[p.side.index()] += 1,
            PieceKind::Pawn if p.coord.row == 0 || p.coord.row == 7 => {
                return Err(SetupError::PawnOnBackRank(p.coord));
            }
            _ => {}
        }
    }
    for side in Side::BOTH {
        match kings[side.index()] {
            0 => return Err(SetupError::MissingKing(side)),
            1 => {}
            _ => return Err(SetupError::DuplicateKing(side)),
        }
    }

    let mut board = Board::empty();
    for p in placements {
        board.place(p.kind, p.side, p.coord, p.move_count);
    }
    Ok(board)
}

/// The pawn that skipped `target` must belong to the side that just moved and
/// stand one row past it.
fn check_en_passant_target(board: &Board, to_move: Side, target: Coord) -> Result<(), SetupError> {
    let mover = to_move.other();
    let pawn_row = target.row + mover.pawn_direction();
    let ok = Coord::in_bounds(target.row, target.col)
        && Coord::in_bounds(pawn_row, target.col)
        && !board.is_occupied(target)
        && board
            .piece_at(Coord::new(pawn_row, target.col))
            .is_some_and(|p| p.kind() == PieceKind::Pawn && p.side() == mover);
    if ok {
        Ok(())
    } else {
        Err(SetupError::BadEnPassantTarget(target))
    }
}
