//! Lines of Action board, static evaluation and alpha-beta search.
//!
//! ```
//! use loa_engine::{Board, Engine};
//! use loa_engine::coretypes::Side;
//!
//! let board = Board::start_position();
//! let mut engine = Engine::new(Side::Black);
//! let result = engine.choose_move(&board).unwrap();
//! assert!(board.is_legal_move(result.best_move));
//! ```

pub mod bitboard;
pub mod board;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod eval;
pub mod fen;
pub mod game;
pub(crate) mod movegen;
pub mod movelist;
pub mod position;
pub mod search;

pub use board::Board;
pub use engine::{Engine, EngineBuilder};
pub use eval::{Evaluate, Evaluator, Magnitude};
pub use fen::Fen;
pub use game::Game;
pub use position::Position;
pub use search::{DepthPolicy, SearchResult};
