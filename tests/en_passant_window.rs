mod common;

use classic_chess::{Game, GameConfig, MoveError, MoveKind, PieceKind, Side};
use common::{at, mv, play, sq};

#[test]
fn double_step_sets_target_and_single_step_clears_it() {
    let mut game = Game::new();
    let record = mv(&mut game, "e2", "e4");
    assert_eq!(record.kind, MoveKind::DoubleStep);
    assert_eq!(game.en_passant_target(), Some(sq("e3")));

    mv(&mut game, "a7", "a6");
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn capture_is_available_for_exactly_one_move() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
    assert_eq!(game.en_passant_target(), Some(sq("d6")));
    assert!(game.legal_moves_from(sq("e5")).contains(&sq("d6")));

    let black_before = game.board().pieces_of(Side::Black).count();
    let record = mv(&mut game, "e5", "d6");
    assert_eq!(record.kind, MoveKind::EnPassant);
    let captured = record.captured.expect("pawn taken en passant");
    assert_eq!((captured.kind(), captured.coord()), (PieceKind::Pawn, sq("d5")));

    assert!(game.piece_at(sq("d5")).is_none());
    assert_eq!(game.piece_at(sq("d6")).unwrap().side(), Side::White);
    assert_eq!(game.board().pieces_of(Side::Black).count(), black_before - 1);
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn declined_capture_expires() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    // White plays something else; Black replies; the chance is gone.
    play(&mut game, &[("h2", "h3"), ("a6", "a5")]);
    assert_eq!(game.en_passant_target(), None);
    assert!(!game.legal_moves_from(sq("e5")).contains(&sq("d6")));

    let before = game.board().clone();
    let err = game.attempt_move_from(sq("e5"), sq("d6")).unwrap_err();
    assert!(matches!(err, MoveError::IllegalDestination { .. }));
    assert_eq!(game.board(), &before);
}

#[test]
fn black_captures_en_passant_too() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("a2", "a3"), ("d7", "d5"), ("a3", "a4"), ("d5", "d4"), ("e2", "e4")],
    );
    assert_eq!(game.en_passant_target(), Some(sq("e3")));
    let record = mv(&mut game, "d4", "e3");
    assert_eq!(record.kind, MoveKind::EnPassant);
    assert!(game.piece_at(sq("e4")).is_none());
}

#[test]
fn en_passant_that_uncovers_the_king_is_illegal() {
    // White king a5 and black rook h5 share the fifth rank with both pawns:
    // taking en passant would clear the rank.
    let config = GameConfig::custom(vec![
        at(PieceKind::King, Side::White, "a5"),
        at(PieceKind::Pawn, Side::White, "d5").moved(2),
        at(PieceKind::Pawn, Side::Black, "e5").moved(1),
        at(PieceKind::Rook, Side::Black, "h5"),
        at(PieceKind::King, Side::Black, "e8"),
    ])
    .with_en_passant_target(Some(sq("e6")));
    let game = Game::with_config(config).unwrap();

    let moves = game.legal_moves_from(sq("d5"));
    assert_eq!(moves, vec![sq("d6")]);
}
