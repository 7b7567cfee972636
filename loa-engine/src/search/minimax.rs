//! Minimax implementation.
//!
//! Visits every node of the tree. Follows the same leaf, sense and tie-breaking
//! conventions as alpha_beta, so both return the same root value and move for
//! a deterministic evaluator.

use crate::coretypes::{PlyKind, Score, Sense};
use crate::eval::Evaluate;
use crate::position::Position;

/// Base minimax call. Searches `position` for the side to move to `depth` plies.
/// It returns the absolute score and best move for the position.
pub fn minimax<P, E>(position: &P, depth: PlyKind, evaluator: &mut E) -> (Score, P::Move)
where
    P: Position,
    E: Evaluate<P>,
{
    assert_ne!(depth, 0);
    assert!(!position.game_over());

    let legal_moves = position.legal_moves();
    let legal_moves = legal_moves.as_ref();
    assert!(!legal_moves.is_empty());

    let sense = Sense::from(position.turn());
    let mut best_score = sense.worst();
    let mut best_move = legal_moves[0];

    for &legal_move in legal_moves {
        let mut child = position.clone();
        child.do_move(legal_move);
        let move_score = minimax_impl(&child, depth - 1, sense.flip(), evaluator);

        if sense.improves(move_score, best_score) {
            best_score = move_score;
            best_move = legal_move;
        }
    }

    (best_score, best_move)
}

fn minimax_impl<P, E>(position: &P, depth: PlyKind, sense: Sense, evaluator: &mut E) -> Score
where
    P: Position,
    E: Evaluate<P>,
{
    if depth == 0 || position.game_over() {
        return evaluator.evaluate(position);
    }

    let mut best_score = sense.worst();
    for &legal_move in position.legal_moves().as_ref() {
        let mut child = position.clone();
        child.do_move(legal_move);
        let move_score = minimax_impl(&child, depth - 1, sense.flip(), evaluator);

        if sense.improves(move_score, best_score) {
            best_score = move_score;
        }
    }
    best_score
}
