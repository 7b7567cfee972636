//! Games
//!
//! Engines playing complete games against each other.

use loa_engine::coretypes::Side;
use loa_engine::eval::Magnitude;
use loa_engine::*;

/// Plays a game between two engines and returns it once finished.
fn self_play_tester(black: EngineBuilder, white: EngineBuilder, move_limit: u32) -> Game {
    let mut engines = [black.side(Side::Black).build(), white.side(Side::White).build()];
    let mut game = Game::start_position();
    game.set_move_limit(move_limit).unwrap();

    while !game.game_over() {
        let engine = &mut engines[game.board.turn().index()];
        let result = engine.choose_move(&game.board).unwrap();
        game.do_move(result.best_move).unwrap();
    }
    assert!(game.moves.len() as u32 <= move_limit);
    game
}

#[test]
fn fixed_depth_game_finishes() {
    let depth = DepthPolicy::fixed(2).unwrap();
    let builder = EngineBuilder::new().depth_policy(depth);
    let game = self_play_tester(builder.clone(), builder, 60);

    let outcome = game.winner().unwrap();
    match outcome.winner() {
        Some(side) => assert!(game.board.pieces_contiguous(side)),
        None => assert_eq!(game.moves.len(), 60),
    }
}

#[test]
fn deterministic_engines_repeat_games() {
    let builder = EngineBuilder::new();
    let first = self_play_tester(builder.clone(), builder.clone(), 24);
    let second = self_play_tester(builder.clone(), builder, 24);
    assert_eq!(first.moves, second.moves);
}

#[test]
fn seeded_random_engines_repeat_games() {
    let black = EngineBuilder::new().magnitude(Magnitude::random(5));
    let white = EngineBuilder::new().magnitude(Magnitude::random(6));
    let first = self_play_tester(black.clone(), white.clone(), 24);
    let second = self_play_tester(black, white, 24);
    assert_eq!(first.moves, second.moves);
}

#[test]
fn replaying_history_reaches_same_board() {
    let game = self_play_tester(EngineBuilder::new(), EngineBuilder::new(), 20);
    let mut base = Board::start_position();
    base.set_move_limit(20).unwrap();
    let replayed = Game::new(base, game.moves.clone()).unwrap();
    assert_eq!(replayed.board, game.board);
}
