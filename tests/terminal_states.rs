mod common;

use classic_chess::{Game, GameConfig, GamePhase, MoveError, PieceKind, Side, Winner};
use common::{at, mv, play, sq};

#[test]
fn fools_mate_is_checkmate_for_black() {
    let mut game = Game::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    assert!(!game.is_over());

    mv(&mut game, "d8", "h4");

    assert!(game.is_in_check(Side::White));
    assert!(game.is_checkmate());
    assert!(!game.is_stalemate());
    assert_eq!(game.winner(), Some(Winner::Black));
    assert_eq!(game.phase(), GamePhase::Checkmate);
    let status = game.status();
    assert!(status.is_over);
    assert_eq!(status.turn, Side::White);
}

#[test]
fn no_moves_after_the_game_ends() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    let before = game.board().clone();
    let err = game.attempt_move_from(sq("a2"), sq("a3")).unwrap_err();
    assert_eq!(err, MoveError::GameOver);
    assert_eq!(game.board(), &before);
}

#[test]
fn cornered_king_is_stalemate_and_a_draw() {
    let config = GameConfig::custom(vec![
        at(PieceKind::King, Side::White, "a1"),
        at(PieceKind::King, Side::Black, "c2"),
        at(PieceKind::Queen, Side::Black, "b3"),
    ]);
    let game = Game::with_config(config).unwrap();

    assert!(!game.is_in_check(Side::White));
    assert!(game.is_stalemate());
    assert!(!game.is_checkmate());
    assert_eq!(game.winner(), Some(Winner::Draw));
    assert!(game.status().is_over);
}

#[test]
fn stalemate_reached_by_a_move() {
    // Black queen b4 -> b3 stalemates the white king on a1.
    let config = GameConfig::custom(vec![
        at(PieceKind::King, Side::White, "a1"),
        at(PieceKind::King, Side::Black, "c2"),
        at(PieceKind::Queen, Side::Black, "b4"),
    ])
    .with_first_to_move(Side::Black);
    let mut game = Game::with_config(config).unwrap();
    assert!(!game.is_over());

    mv(&mut game, "b4", "b3");
    assert_eq!(game.phase(), GamePhase::Stalemate);
    assert_eq!(game.winner(), Some(Winner::Draw));
}

#[test]
fn check_with_an_escape_is_not_terminal() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
    assert!(game.is_in_check(Side::Black));
    assert!(!game.is_over());
    // Only g7-g6 blocks.
    let total: usize = game
        .board()
        .pieces_of(Side::Black)
        .map(|p| game.legal_moves(p.id()).len())
        .sum();
    assert_eq!(total, 1);
    assert_eq!(game.legal_moves_from(sq("g7")), vec![sq("g6")]);
}
