use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chess::config::GameConfig;
use crate::chess::piece::{Piece, PieceId, PieceKind, Side};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::{MoveError, PromotionError, SetupError};
use crate::rules::attacks;
use crate::rules::castling;
use crate::rules::checkmate::{self, Terminal};
use crate::rules::en_passant;
use crate::rules::legality;
use crate::rules::promotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Winner::White,
            Side::Black => Winner::Black,
        }
    }
}

/// Where the game stands between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingMove,
    /// A pawn reached the last row; nothing else may happen until
    /// [`Game::resolve_promotion`] is called.
    PromotionPending,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub turn: Side,
    pub winner: Option<Winner>,
    pub is_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Quiet,
    DoubleStep,
    Capture,
    EnPassant,
    Castle,
    Promotion,
}

/// What the most recent committed move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub side: Side,
    pub from: Coord,
    pub to: Coord,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// Set once a pending promotion is resolved.
    pub promoted_to: Option<PieceKind>,
}

/// Read-only view handed to rendering and input layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub phase: GamePhase,
    pub in_check: bool,
    pub en_passant_target: Option<Coord>,
    pub promotion_pending: Option<Coord>,
    pub pieces: Vec<Piece>,
}

/// The game state machine: turn order, en passant, promotion and the end of
/// the game.
///
/// Every mutating call either commits fully or returns `Err` with nothing
/// changed.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    start: Board,
    board: Board,
    turn: Side,
    en_passant_target: Option<Coord>,
    promotion_pending: Option<PieceId>,
    terminal: Option<Terminal>,
    winner: Option<Winner>,
    last_move: Option<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A standard game, White to move.
    pub fn new() -> Self {
        let board = Board::standard();
        let config = GameConfig::default();
        info!(name = %config.name, "new game");
        Self {
            turn: config.first_to_move,
            config,
            start: board.clone(),
            board,
            en_passant_target: None,
            promotion_pending: None,
            terminal: None,
            winner: None,
            last_move: None,
        }
    }

    /// A game from a (possibly custom) setup. A setup that is already
    /// checkmate or stalemate starts out finished.
    pub fn with_config(config: GameConfig) -> Result<Self, SetupError> {
        let board = config.build_board()?;
        let mut game = Self {
            turn: config.first_to_move,
            en_passant_target: config.en_passant_target,
            start: board.clone(),
            board,
            config,
            promotion_pending: None,
            terminal: None,
            winner: None,
            last_move: None,
        };
        info!(name = %game.config.name, turn = %game.turn, "new game");
        game.evaluate_terminal();
        Ok(game)
    }

    /// Back to the configured starting position ("play again").
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.turn = self.config.first_to_move;
        self.en_passant_target = self.config.en_passant_target;
        self.promotion_pending = None;
        self.terminal = None;
        self.winner = None;
        self.last_move = None;
        info!(name = %self.config.name, "game reset");
        self.evaluate_terminal();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant_target
    }

    /// The pawn waiting to be promoted, if any.
    pub fn promotion_pending(&self) -> Option<&Piece> {
        self.promotion_pending.and_then(|id| self.board.piece(id))
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.terminal.is_some()
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.board.piece_at(coord)
    }

    pub fn phase(&self) -> GamePhase {
        match (self.terminal, self.promotion_pending) {
            (Some(Terminal::Checkmate), _) => GamePhase::Checkmate,
            (Some(Terminal::Stalemate), _) => GamePhase::Stalemate,
            (None, Some(_)) => GamePhase::PromotionPending,
            (None, None) => GamePhase::AwaitingMove,
        }
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            turn: self.turn,
            winner: self.winner,
            is_over: self.is_over(),
        }
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        attacks::is_in_check(&self.board, side)
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.terminal == Some(Terminal::Checkmate)
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.terminal == Some(Terminal::Stalemate)
    }

    /// Legal destinations of `id` under the live en-passant target.
    ///
    /// Clones the board (grid and piece arena) on every call so it can work
    /// through a shared reference. Callers querying many pieces in a loop
    /// should use [`Game::legal_moves_in_place`].
    pub fn legal_moves(&self, id: PieceId) -> Vec<Coord> {
        let mut scratch = self.board.clone();
        legality::legal_moves(&mut scratch, id, self.en_passant_target)
    }

    /// Same as [`Game::legal_moves`] without the clone: probes run on the live
    /// board and are rolled back before this returns.
    pub fn legal_moves_in_place(&mut self, id: PieceId) -> Vec<Coord> {
        legality::legal_moves(&mut self.board, id, self.en_passant_target)
    }

    pub fn legal_moves_from(&self, coord: Coord) -> Vec<Coord> {
        match self.board.piece_at(coord) {
            Some(p) => self.legal_moves(p.id()),
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status(),
            phase: self.phase(),
            in_check: self.is_in_check(self.turn),
            en_passant_target: self.en_passant_target,
            promotion_pending: self.promotion_pending().map(Piece::coord),
            pieces: self.board.pieces().cloned().collect(),
        }
    }

    /// Move piece `id` to `to`.
    ///
    /// Castling is requested by moving the king two squares toward a rook. A
    /// pawn reaching the last row commits but leaves the turn with the mover
    /// until [`Game::resolve_promotion`].
    pub fn attempt_move(&mut self, id: PieceId, to: Coord) -> Result<MoveRecord, MoveError> {
        match self.check_move(id, to) {
            Ok(piece) => Ok(self.commit(piece, to)),
            Err(err) => {
                debug!(piece = %id, %to, %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Move whatever stands on `from` to `to`.
    pub fn attempt_move_from(&mut self, from: Coord, to: Coord) -> Result<MoveRecord, MoveError> {
        match self.board.piece_at(from) {
            Some(p) => {
                let id = p.id();
                self.attempt_move(id, to)
            }
            None => {
                let err = MoveError::IllegalDestination { from, to };
                debug!(%from, %to, %err, "move rejected: empty square");
                Err(err)
            }
        }
    }

    /// Everything that can reject a move. Returns the mover as it stands.
    fn check_move(&mut self, id: PieceId, to: Coord) -> Result<Piece, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.promotion_pending.is_some() {
            return Err(MoveError::PromotionPending);
        }
        let piece = self.board.piece(id).ok_or(MoveError::NoSuchPiece(id))?.clone();
        if piece.side() != self.turn {
            return Err(MoveError::NotYourTurn {
                piece: id,
                side: piece.side(),
                turn: self.turn,
            });
        }
        let from = piece.coord();
        if !legality::is_legal_move(&mut self.board, id, to, self.en_passant_target) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    /// Apply a move already known to be legal.
    fn commit(&mut self, piece: Piece, to: Coord) -> MoveRecord {
        let id = piece.id();
        let from = piece.coord();

        let mut record = MoveRecord {
            piece: id,
            side: piece.side(),
            from,
            to,
            kind: MoveKind::Quiet,
            captured: None,
            promoted_to: None,
        };

        if let Some(plan) = castling::castle_plan(&self.board, id, to) {
            castling::perform(&mut self.board, &plan);
            record.kind = MoveKind::Castle;
            info!(side = %piece.side(), king_to = %plan.king_to, rook_to = %plan.rook_to, "castled");
        } else {
            if en_passant::is_en_passant_capture(&self.board, &piece, to, self.en_passant_target) {
                record.captured = en_passant::victim_square(piece.side(), to).and_then(|sq| self.board.capture(sq));
                record.kind = MoveKind::EnPassant;
                info!(side = %piece.side(), %to, "en passant capture");
            } else if let Some(taken) = self.board.capture(to) {
                record.captured = Some(taken);
                record.kind = MoveKind::Capture;
            } else if en_passant::skipped_square(&piece, from, to).is_some() {
                record.kind = MoveKind::DoubleStep;
            }
            self.board.relocate(id, to);
            self.board.bump_move_count(id);
        }

        self.en_passant_target = en_passant::skipped_square(&piece, from, to);

        if promotion::reaches_last_row(&piece, to) {
            record.kind = MoveKind::Promotion;
            self.promotion_pending = Some(id);
            info!(side = %piece.side(), %to, "promotion pending");
            self.last_move = Some(record.clone());
            return record;
        }

        info!(piece = %id, side = %piece.side(), %from, %to, kind = ?record.kind, "move committed");
        self.last_move = Some(record.clone());
        self.finish_turn();
        record
    }

    /// Replace the pending pawn with `kind` and hand the turn over.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> Result<PieceId, PromotionError> {
        let Some(pawn) = self.promotion_pending else {
            debug!(?kind, "promotion rejected: none pending");
            return Err(PromotionError::NotPending);
        };
        let new_id = match promotion::promote(&mut self.board, pawn, kind) {
            Ok(id) => id,
            Err(err) => {
                debug!(?kind, %err, "promotion rejected");
                return Err(err);
            }
        };
        self.promotion_pending = None;
        if let Some(record) = self.last_move.as_mut() {
            record.promoted_to = Some(kind);
        }
        info!(side = %self.turn, ?kind, piece = %new_id, "pawn promoted");
        self.finish_turn();
        Ok(new_id)
    }

    fn finish_turn(&mut self) {
        self.turn = self.turn.other();
        self.evaluate_terminal();
    }

    /// Decide checkmate / stalemate for the side to move.
    fn evaluate_terminal(&mut self) {
        self.terminal = checkmate::evaluate(&mut self.board, self.turn, self.en_passant_target);
        self.winner = match self.terminal {
            Some(Terminal::Checkmate) => Some(Winner::from(self.turn.other())),
            Some(Terminal::Stalemate) => Some(Winner::Draw),
            None => None,
        };
        if let Some(terminal) = self.terminal {
            info!(?terminal, winner = ?self.winner, "game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_awaits_white() {
        let game = Game::new();
        assert_eq!(
            game.status(),
            GameStatus {
                turn: Side::White,
                winner: None,
                is_over: false
            }
        );
        assert_eq!(game.phase(), GamePhase::AwaitingMove);
        assert!(!game.is_in_check(Side::White));
    }

    #[test]
    fn wrong_side_is_rejected_without_change() {
        let mut game = Game::new();
        let before = game.board().clone();
        let err = game
            .attempt_move_from(Coord::new(1, 4), Coord::new(3, 4))
            .unwrap_err();
        assert!(matches!(err, MoveError::NotYourTurn { .. }));
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Side::White);
    }

    #[test]
    fn illegal_destination_is_rejected_without_change() {
        let mut game = Game::new();
        let before = game.board().clone();
        let err = game
            .attempt_move_from(Coord::new(6, 4), Coord::new(3, 4))
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalDestination {
                from: Coord::new(6, 4),
                to: Coord::new(3, 4)
            }
        );
        assert_eq!(game.board(), &before);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn committed_move_bumps_count_and_switches_turn() {
        let mut game = Game::new();
        let record = game
            .attempt_move_from(Coord::new(7, 6), Coord::new(5, 5))
            .unwrap();
        assert_eq!(record.kind, MoveKind::Quiet);
        assert_eq!(game.turn(), Side::Black);
        assert_eq!(game.piece_at(Coord::new(5, 5)).unwrap().move_count(), 1);
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn in_place_query_matches_cloning_query() {
        let mut game = Game::new();
        game.attempt_move_from(Coord::new(6, 4), Coord::new(4, 4)).unwrap();
        let before = game.board().clone();
        let ids: Vec<PieceId> = game.board().pieces().map(Piece::id).collect();
        for id in ids {
            let cloned = game.legal_moves(id);
            assert_eq!(game.legal_moves_in_place(id), cloned);
        }
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn promotion_without_pending_pawn_is_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.resolve_promotion(PieceKind::Queen),
            Err(PromotionError::NotPending)
        );
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        game.attempt_move_from(Coord::new(6, 4), Coord::new(4, 4)).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.en_passant_target(), None);
    }
}
