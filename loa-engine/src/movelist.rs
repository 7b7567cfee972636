//! Move containers.

use std::fmt::Display;

use arrayvec::ArrayVec;

use crate::coretypes::{Move, MAX_MOVES};

/// Legal moves of one position. No position has more than `MAX_MOVES`.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// MoveHistory is the sequence of moves played in a game.
pub type MoveHistory = Vec<Move>;

/// Returns a string with the displayed items of a list, separated by spaces.
/// Display cannot be implemented on external types such as ArrayVec.
pub fn display<T: Display>(items: &[T]) -> String {
    let mut displayed = String::new();
    for item in items.iter() {
        displayed.push_str(&item.to_string());
        displayed.push(' ');
    }
    displayed.pop();

    displayed
}
