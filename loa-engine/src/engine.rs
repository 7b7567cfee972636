//! Engine struct acts as a simplified API for choosing moves on a Board.

use crate::board::Board;
use crate::coretypes::Side;
use crate::error::{self, ErrorKind};
use crate::eval::{Evaluator, Magnitude};
use crate::search::{self, DepthPolicy, SearchResult};

/// EngineBuilder allows for parameters of an Engine to be set and built once.
///
/// Default values:
///
/// * `side`: Black
/// * `depth_policy`: DepthPolicy::Schedule
/// * `magnitude`: Magnitude::Fixed(1)
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    side: Side,
    depth_policy: DepthPolicy,
    magnitude: Magnitude,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            side: Side::Black,
            depth_policy: DepthPolicy::default(),
            magnitude: Magnitude::default(),
        }
    }

    /// Create and return a new Engine.
    pub fn build(&self) -> Engine {
        Engine {
            side: self.side,
            depth_policy: self.depth_policy,
            evaluator: Evaluator::new(self.magnitude.clone()),
        }
    }

    /// Set the side the Engine plays.
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set how deep the Engine searches.
    pub fn depth_policy(mut self, depth_policy: DepthPolicy) -> Self {
        self.depth_policy = depth_policy;
        self
    }

    /// Set the magnitude the Engine's evaluator scores non-winning positions with.
    pub fn magnitude(mut self, magnitude: Magnitude) -> Self {
        self.magnitude = magnitude;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine plays one side of a game, choosing a move whenever it is that side's turn.
/// No state carries over from one search to the next.
#[derive(Debug, Clone)]
pub struct Engine {
    side: Side,
    depth_policy: DepthPolicy,
    evaluator: Evaluator,
}

impl Engine {
    pub fn new(side: Side) -> Self {
        EngineBuilder::new().side(side).build()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn depth_policy(&self) -> DepthPolicy {
        self.depth_policy
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    pub fn set_depth_policy(&mut self, depth_policy: DepthPolicy) {
        self.depth_policy = depth_policy;
    }

    pub fn set_magnitude(&mut self, magnitude: Magnitude) {
        self.evaluator.set_magnitude(magnitude);
    }

    /// Choose a move for the engine's side on `board`.
    /// Returns Err if it is not the engine's turn or the game is already over.
    pub fn choose_move(&mut self, board: &Board) -> error::Result<SearchResult> {
        if board.turn() != self.side {
            return Err((
                ErrorKind::EngineWrongTurn,
                format!("engine plays {} but {} is to move", self.side, board.turn()),
            )
                .into());
        }
        if let Some(outcome) = board.winner() {
            return Err((ErrorKind::GameOver, outcome).into());
        }

        Ok(search::search(
            board,
            self.side,
            &self.depth_policy,
            &mut self.evaluator,
        ))
    }
}
