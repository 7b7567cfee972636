//! Move Generation Functions.
//!
//! A piece moves in a straight line in any of the 8 directions, exactly as many
//! squares as there are pieces of either side on the whole line of movement.
//! It may jump over its own pieces but not over opposing pieces,
//! and it captures an opposing piece by landing on it.

use crate::bitboard::Bitboard;
use crate::coretypes::{Direction, Move, Square};
use crate::movelist::MoveList;

/// Number of pieces on the line through `square` along `direction`,
/// counting both ways and the square itself if occupied.
pub fn line_count(occupied: Bitboard, square: Square, direction: Direction) -> u8 {
    let mut count = occupied.has_square(square) as u8;
    for dir in [direction, direction.opposite()] {
        let mut steps = 1;
        while let Some(next) = square.step(dir, steps) {
            count += occupied.has_square(next) as u8;
            steps += 1;
        }
    }
    count
}

/// The landing square of the piece on `from` moving along `direction`,
/// or None if that move is blocked or leaves the board.
pub fn target(own: Bitboard, other: Bitboard, from: Square, direction: Direction) -> Option<Square> {
    let distance = line_count(own | other, from, direction) as i8;
    let to = from.step(direction, distance)?;
    if own.has_square(to) {
        return None;
    }
    for steps in 1..distance {
        let between = from.step(direction, steps)?;
        if other.has_square(between) {
            return None;
        }
    }
    Some(to)
}

/// Generates every legal move for the side whose pieces are `own`.
/// Moves are ordered by origin square a1..h8, then by direction clockwise from North.
pub fn legal_moves(own: Bitboard, other: Bitboard) -> MoveList {
    let mut moves = MoveList::new();
    for from in own {
        for direction in Direction::ALL {
            if let Some(to) = target(own, other, from, direction) {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

/// Returns true if `move_` is legal for the side whose pieces are `own`.
pub fn is_legal(own: Bitboard, other: Bitboard, move_: Move) -> bool {
    own.has_square(move_.from())
        && Direction::ALL
            .iter()
            .any(|&direction| target(own, other, move_.from(), direction) == Some(move_.to()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn bb(squares: &[&str]) -> Bitboard {
        squares.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn line_count_both_ways() {
        let occupied = bb(&["a1", "c3", "h8", "c1"]);
        assert_eq!(line_count(occupied, sq("c3"), Direction::NorthEast), 3);
        assert_eq!(line_count(occupied, sq("c3"), Direction::SouthWest), 3);
        assert_eq!(line_count(occupied, sq("c3"), Direction::South), 2);
        assert_eq!(line_count(occupied, sq("c3"), Direction::East), 1);
    }

    #[test]
    fn cannot_jump_opponent() {
        // Three pieces on column b: b1 would land on b4 but must pass b2 and b3.
        let own = bb(&["b1"]);
        let other = bb(&["b2", "b3"]);
        assert_eq!(target(own, other, sq("b1"), Direction::North), None);
        // Jumping own piece b3 from b2 to b5 is fine.
        assert_eq!(target(other, own, sq("b2"), Direction::North), Some(sq("b5")));
    }

    #[test]
    fn cannot_land_on_own_but_can_capture() {
        let own = bb(&["d4", "f4"]);
        let other = bb(&["d6"]);
        // Row 4 holds two pieces, so d4 east lands on own f4.
        assert_eq!(target(own, other, sq("d4"), Direction::East), None);
        // Column d holds two pieces, so d4 north captures on d6.
        assert_eq!(target(own, other, sq("d4"), Direction::North), Some(sq("d6")));
        assert!(is_legal(own, other, Move::new(sq("d4"), sq("d6"))));
        assert!(!is_legal(own, other, Move::new(sq("d4"), sq("d5"))));
        assert!(!is_legal(own, other, Move::new(sq("d6"), sq("d4"))));
    }

    #[test]
    fn off_board_moves_are_skipped() {
        let own = bb(&["a1", "a2"]);
        let moves = legal_moves(own, Bitboard::EMPTY);
        assert!(moves.iter().all(|m| m.to().column() <= 1));
        assert!(moves.contains(&Move::new(sq("a1"), sq("b1"))));
        assert!(moves.contains(&Move::new(sq("a2"), sq("a4"))));
        assert!(moves.contains(&Move::new(sq("a1"), sq("a3"))));
        assert_eq!(moves.len(), 7);
    }
}
