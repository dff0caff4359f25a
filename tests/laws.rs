//! Properties that must hold in every reachable position, checked along a few
//! deterministic self-play walks.

use classic_chess::rules::checkmate::has_any_legal_move;
use classic_chess::rules::legality::legal_moves;
use classic_chess::{Coord, Game, GamePhase, MoveError, PieceId, PieceKind};

const PLIES: usize = 80;
const CHOICES: [PieceKind; 4] = [PieceKind::Queen, PieceKind::Knight, PieceKind::Rook, PieceKind::Bishop];

fn all_moves(game: &Game) -> Vec<(PieceId, Coord)> {
    let mut scratch = game.clone();
    let ids: Vec<PieceId> = scratch.board().pieces_of(scratch.turn()).map(|p| p.id()).collect();
    ids.into_iter()
        .flat_map(|id| {
            scratch
                .legal_moves_in_place(id)
                .into_iter()
                .map(move |to| (id, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Walk one game, picking moves with a small linear congruential sequence.
fn walk(seed: u64, mut visit: impl FnMut(&Game)) {
    let mut game = Game::new();
    let mut state = seed;
    for ply in 0..PLIES {
        visit(&game);
        if game.is_over() {
            return;
        }
        let moves = all_moves(&game);
        assert!(!moves.is_empty(), "seed {seed} ply {ply}: live game without moves");
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let (id, to) = moves[(state >> 33) as usize % moves.len()];
        game.attempt_move(id, to)
            .unwrap_or_else(|e| panic!("seed {seed} ply {ply}: listed move rejected: {e}"));
        if game.phase() == GamePhase::PromotionPending {
            game.resolve_promotion(CHOICES[ply % CHOICES.len()]).unwrap();
        }
    }
    visit(&game);
}

const SEEDS: [u64; 4] = [1, 7, 42, 2024];

#[test]
fn no_legal_move_leaves_own_king_in_check() {
    for seed in SEEDS {
        walk(seed, |game| {
            let mover = game.turn();
            for (id, to) in all_moves(game) {
                let mut probe = game.clone();
                probe.attempt_move(id, to).unwrap();
                assert!(!probe.is_in_check(mover), "seed {seed}: {id} -> {to} exposes the king");
            }
        });
    }
}

#[test]
fn legality_probes_restore_the_board() {
    for seed in SEEDS {
        walk(seed, |game| {
            let mut board = game.board().clone();
            let before = board.clone();
            let ids: Vec<PieceId> = board.pieces().map(|p| p.id()).collect();
            for id in ids {
                legal_moves(&mut board, id, game.en_passant_target());
            }
            has_any_legal_move(&mut board, game.turn(), game.en_passant_target());
            assert_eq!(board, before, "seed {seed}");
        });
    }
}

#[test]
fn unlisted_destinations_are_rejected_without_change() {
    for seed in SEEDS {
        walk(seed, |game| {
            if game.is_over() {
                return;
            }
            let ids: Vec<PieceId> = game.board().pieces_of(game.turn()).map(|p| p.id()).collect();
            for id in ids {
                let legal = game.legal_moves(id);
                for to in Coord::all().filter(|c| !legal.contains(c)) {
                    let mut probe = game.clone();
                    let err = probe.attempt_move(id, to).unwrap_err();
                    assert!(matches!(err, MoveError::IllegalDestination { .. }));
                    assert_eq!(probe.board(), game.board());
                    assert_eq!(probe.turn(), game.turn());
                }
            }
        });
    }
}

#[test]
fn turns_alternate_and_grids_agree_with_pieces() {
    for seed in SEEDS {
        let mut last_turn = None;
        walk(seed, |game| {
            if let Some(prev) = last_turn {
                assert_ne!(prev, game.turn(), "seed {seed}");
            }
            last_turn = Some(game.turn());

            let board = game.board();
            for p in board.pieces() {
                assert_eq!(board.piece_at(p.coord()).map(|q| q.id()), Some(p.id()));
            }
            assert_eq!(board.occupants().count(), board.pieces().count());
        });
    }
}

#[test]
fn finished_games_refuse_everything() {
    for seed in SEEDS {
        walk(seed, |game| {
            if !game.is_over() {
                return;
            }
            for p in game.board().pieces() {
                let mut probe = game.clone();
                for to in Coord::all() {
                    assert_eq!(probe.attempt_move(p.id(), to), Err(MoveError::GameOver));
                }
            }
        });
    }
}
