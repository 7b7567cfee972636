//! The capabilities a game position must provide to be evaluated and searched.
//!
//! `Board` is the Lines of Action implementation. Search and evaluation only
//! depend on this trait, so any position with the same notion of sides,
//! contiguity and legal moves can be searched.

use std::fmt::{Debug, Display};

use crate::bitboard::RegionSizes;
use crate::coretypes::{MoveCount, Side};

pub trait Position: Clone {
    /// A single ply. Must be copyable and printable for reporting.
    type Move: Copy + Eq + Debug + Display;
    /// Ordered container of legal moves.
    type Moves: AsRef<[Self::Move]>;

    /// All legal moves for the side to move, in a fixed enumeration order.
    fn legal_moves(&self) -> Self::Moves;

    /// Apply a move in place, assuming it is legal.
    fn do_move(&mut self, move_: Self::Move);

    /// Returns true if the game has ended in this position.
    fn game_over(&self) -> bool;

    /// Number of moves made in the game so far.
    fn moves_made(&self) -> MoveCount;

    /// The side to move.
    fn turn(&self) -> Side;

    /// Returns true if all pieces of `side` form one connected region.
    fn pieces_contiguous(&self, side: Side) -> bool;

    /// Total number of pieces `side` has on the board.
    fn piece_count(&self, side: Side) -> u32;

    /// Sizes of the connected regions of `side`, largest first.
    fn region_sizes(&self, side: Side) -> RegionSizes;

    /// Size of the largest connected region of `side`, or 0 if it has no pieces.
    fn largest_region(&self, side: Side) -> u32 {
        self.region_sizes(side).first().map_or(0, |&size| size as u32)
    }
}
