//! Win In One
//!
//! Positions where the side to move can join all of its pieces with one move.
//! The engine should find the joining move at any depth.

use loa_engine::coretypes::{Move, Outcome, Side};
use loa_engine::fen::Fen;
use loa_engine::*;

fn win_in_one_tester(layout: &str, winning_move: &str, depth_policy: DepthPolicy) {
    let board = Board::parse_fen(layout).unwrap();
    let side = board.turn();
    let bm: Move = winning_move.parse().unwrap();
    let mut engine = EngineBuilder::new()
        .side(side)
        .depth_policy(depth_policy)
        .build();

    let result = engine.choose_move(&board).unwrap();
    assert_eq!(result.best_move, bm, "{board}\n{result}");
    assert_eq!(result.leading(), Some(side));
    assert!(result.score.is_win());

    let after = board.make_move(result.best_move);
    assert_eq!(after.winner(), Some(Outcome::Win(side)));
}

#[test]
fn white_joins_with_diagonal_slide() {
    // h8 moves 3 along the long diagonal, which also holds d4 and b2.
    let layout = "7w/8/8/3w4/3w4/8/1b4b1/8 w";
    win_in_one_tester(layout, "h8-e5", DepthPolicy::Schedule);
    win_in_one_tester(layout, "h8-e5", DepthPolicy::fixed(2).unwrap());
}

#[test]
fn black_joins_with_diagonal_slide() {
    let layout = "7b/8/8/3b4/3b4/8/1w4w1/8 b";
    win_in_one_tester(layout, "h8-e5", DepthPolicy::Schedule);
    win_in_one_tester(layout, "h8-e5", DepthPolicy::fixed(2).unwrap());
}

#[test]
fn white_joins_by_capture() {
    // a1 moves 2 north, capturing the black piece on a3 next to b4.
    let layout = "7b/8/5b2/8/1ww5/b7/8/w7 w";
    win_in_one_tester(layout, "a1-a3", DepthPolicy::Schedule);
}

#[test]
fn winning_move_found_late_in_game() {
    // With 45 moves made the scheduled depth is 4.
    let board = Board::parse_fen("7w/8/8/3w4/3w4/8/1b4b1/8 w 45").unwrap();
    let mut engine = Engine::new(Side::White);
    let result = engine.choose_move(&board).unwrap();
    assert_eq!(result.depth, 4);
    assert!(result.score.is_win());
    assert_eq!(result.leading(), Some(Side::White));
    assert!(board.is_legal_move(result.best_move));
}
