//! Minimax with Alpha-Beta pruning implementation.

use std::time::Instant;

use tracing::trace;

use crate::coretypes::{PlyKind, Score, Sense};
use crate::eval::Evaluate;
use crate::position::Position;
use crate::search::SearchResult;

/// Base alpha_beta call. Searches `position` for the side to move to `depth` plies.
/// It returns the best move and absolute score for the position in the search tree.
///
/// The position is cloned before searching and is never modified.
pub fn alpha_beta<P, E>(position: &P, depth: PlyKind, evaluator: &mut E) -> SearchResult<P::Move>
where
    P: Position,
    E: Evaluate<P>,
{
    assert_ne!(depth, 0, "search depth must be at least 1");
    assert!(!position.game_over(), "cannot search a finished game");

    let instant = Instant::now();
    let side = position.turn();
    let root = position.clone();
    let mut searcher = AlphaBeta::new(evaluator);
    let score = searcher.find_move(&root, depth, true, Sense::from(side), -Score::INFINITY, Score::INFINITY);

    SearchResult {
        best_move: searcher
            .found_move
            .expect("root of a non-terminal position records a move"),
        score,
        side,
        depth,
        nodes: searcher.nodes,
        cutoffs: searcher.cutoffs,
        elapsed: instant.elapsed(),
    }
}

/// The best child seen so far at one node.
#[derive(Debug, Copy, Clone)]
struct BestSoFar<M> {
    value: Score,
    move_: M,
}

/// State for one top-level search. Created fresh per search and discarded after.
pub struct AlphaBeta<'e, P: Position, E> {
    evaluator: &'e mut E,
    found_move: Option<P::Move>,
    nodes: u64,
    cutoffs: u64,
}

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
impl<'e, P: Position, E: Evaluate<P>> AlphaBeta<'e, P, E> {
    pub fn new(evaluator: &'e mut E) -> Self {
        Self {
            evaluator,
            found_move: None,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Move recorded by the last `find_move` call made with `save_move`.
    pub fn found_move(&self) -> Option<P::Move> {
        self.found_move
    }

    /// Number of positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Number of nodes whose remaining children were pruned.
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// Returns the value of `position` searched to `depth` plies, where `sense`
    /// is the direction the side to move optimizes the absolute score in.
    /// If `save_move` is true, the best move found at this node is recorded
    /// and available from `found_move`.
    ///
    /// A node at depth 0 or a finished game is scored by the evaluator.
    /// Moves are tried in the position's enumeration order, and the first move
    /// with the best value is kept when several tie.
    ///
    /// # Panics
    /// Panics if a non-terminal position has no legal moves.
    pub fn find_move(
        &mut self,
        position: &P,
        depth: PlyKind,
        save_move: bool,
        sense: Sense,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;
        if depth == 0 || position.game_over() {
            return self.evaluator.evaluate(position);
        }

        let legal_moves = position.legal_moves();
        let legal_moves = legal_moves.as_ref();
        assert!(!legal_moves.is_empty(), "non-terminal position has no legal moves");

        let mut best = BestSoFar {
            value: sense.worst(),
            move_: legal_moves[0],
        };

        for &legal_move in legal_moves {
            let mut child = position.clone();
            child.do_move(legal_move);
            let value = self.find_move(&child, depth - 1, false, sense.flip(), alpha, beta);

            if save_move {
                trace!(%legal_move, %value, "root move");
            }
            if sense.improves(value, best.value) {
                best = BestSoFar { value, move_: legal_move };
            }
            match sense {
                Sense::Maximizing => alpha = alpha.max(value),
                Sense::Minimizing => beta = beta.min(value),
            }
            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        if save_move {
            self.found_move = Some(best.move_);
        }
        best.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::coretypes::Side;
    use crate::eval::{evaluate, Evaluator};
    use crate::fen::Fen;

    #[test]
    fn depth_one_takes_first_greedy_maximum() {
        let board = Board::start_position();
        let result = alpha_beta(&board, 1, &mut Evaluator::default());

        // Black minimizes, so the first move with the lowest child score wins.
        let mut expected = None;
        for move_ in board.legal_moves() {
            let score = evaluate(&board.make_move(move_));
            if expected.map_or(true, |(best, _)| score < best) {
                expected = Some((score, move_));
            }
        }
        assert_eq!(Some((result.score, result.best_move)), expected);
        assert_eq!(result.side, Side::Black);
        assert_eq!(result.nodes, 1 + board.legal_moves().len() as u64);
    }

    #[test]
    fn leaf_scores_without_moves() {
        let board = Board::start_position();
        let mut evaluator = Evaluator::default();
        let mut searcher = AlphaBeta::new(&mut evaluator);
        let score = searcher.find_move(&board, 0, true, Sense::Minimizing, -Score::INFINITY, Score::INFINITY);
        assert_eq!(score, Score(0));
        assert_eq!(searcher.found_move(), None);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn narrow_window_cuts_off() {
        let board = Board::parse_fen("b6b/8/8/8/2bb4/8/1ww5/1w5w w").unwrap();
        let mut evaluator = Evaluator::default();
        let mut searcher = AlphaBeta::new(&mut evaluator);
        // Any child value reaches beta = -WINNING, so the first child already cuts.
        let _ = searcher.find_move(&board, 1, true, Sense::Maximizing, -Score::INFINITY, -Score::WINNING);
        assert_eq!(searcher.cutoffs(), 1);
        assert_eq!(searcher.nodes(), 2);
        assert_eq!(searcher.found_move(), board.legal_moves().first().copied());
    }

    #[test]
    #[should_panic]
    fn finished_game_is_rejected() {
        let board = Board::parse_fen("8/8/8/3bb3/3ww3/8/8/8 w").unwrap();
        let _ = alpha_beta(&board, 2, &mut Evaluator::default());
    }
}
