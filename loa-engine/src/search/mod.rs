//! Search functions.

mod alpha_beta;
mod depth;
mod minimax;

pub use alpha_beta::*;
pub use depth::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::time::Duration;

use tracing::debug;

use crate::coretypes::{Move, PlyKind, Score, Side};
use crate::eval::Evaluate;
use crate::position::Position;

/// The results found from running a search on some root position.
#[derive(Debug, Clone)]
pub struct SearchResult<M = Move> {
    /// The best move to make for a position discovered from search.
    pub best_move: M,
    /// The score of making the best move, absolute (+White, -Black).
    pub score: Score,
    /// The side to move for the root position that was searched.
    pub side: Side,
    /// Depth in plies that was searched.
    pub depth: PlyKind,
    /// Total number of nodes visited in the search, leaves included.
    pub nodes: u64,
    /// Number of nodes where the remaining moves were pruned.
    pub cutoffs: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
}

impl<M> SearchResult<M> {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }

    /// Converts the score of the search into one that is relative to the searching side.
    pub fn relative_score(&self) -> Score {
        match self.side {
            Side::White => self.score,
            Side::Black => -self.score,
        }
    }

    /// Returns the side who is leading in the search of the root position, or None if even.
    pub fn leading(&self) -> Option<Side> {
        self.score.leading()
    }
}

impl<M: Display> Display for SearchResult<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    best_move: {}\n", self.best_move));
        displayed.push_str(&format!("    abs_score: {}\n", self.score));
        displayed.push_str(&format!("    side     : {}\n", self.side));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.nodes));
        displayed.push_str(&format!("    cutoffs  : {}\n", self.cutoffs));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Primary position search function. Chooses a move for `side`, which must be
/// the side to move in `position`, searching as deep as `depth_policy` allows
/// for the moves made so far.
///
/// # Panics
/// Panics if `side` is not the side to move or the game is already over.
pub fn search<P, E>(
    position: &P,
    side: Side,
    depth_policy: &DepthPolicy,
    evaluator: &mut E,
) -> SearchResult<P::Move>
where
    P: Position,
    E: Evaluate<P>,
{
    assert_eq!(side, position.turn(), "searching side must be the side to move");
    let depth = depth_policy.depth(position.moves_made());
    let result = alpha_beta(position, depth, evaluator);

    debug!(
        side = %result.side,
        depth = result.depth,
        score = %result.score,
        best_move = %result.best_move,
        nodes = result.nodes,
        cutoffs = result.cutoffs,
        elapsed = ?result.elapsed,
        "search complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::Evaluator;

    #[test]
    fn scheduled_search_of_start_position() {
        let board = Board::start_position();
        let result = search(&board, Side::Black, &DepthPolicy::Schedule, &mut Evaluator::default());
        assert_eq!(result.depth, 1);
        assert!(board.is_legal_move(result.best_move));
        assert!(result.to_string().contains("best_move"));
    }

    #[test]
    fn relative_score_flips_for_black() {
        let board = Board::start_position();
        let mut result = search(&board, Side::Black, &DepthPolicy::Schedule, &mut Evaluator::default());
        result.score = Score(5);
        assert_eq!(result.relative_score(), Score(-5));
        assert_eq!(result.leading(), Some(Side::White));
    }

    #[test]
    #[should_panic]
    fn wrong_side_panics() {
        let board = Board::start_position();
        let _ = search(&board, Side::White, &DepthPolicy::Schedule, &mut Evaluator::default());
    }
}
