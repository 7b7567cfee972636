//! A general purpose way to efficiently encode a set of squares,
//! where each bit index of a 64-bit unsigned integer represents a board square.
//!
//! Data Order:
//! * Little-Endian Row-Column mapping
//! * a1 = least significant bit = 0b0 = 0
//! * b1 = 0b1 = 1
//! * a2 = 0b1000 = 8
//! * h8 = most significant bit = 0x8000000000000000
//!
//! Compass Rose Bit Shifting:
//! ```text
//! NoWe       North       NoEa
//!      +7     +8      +9
//! West -1      0      +1 East
//!      -9     -8      -7
//! SoWe       South       SoEa
//! ```

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use arrayvec::ArrayVec;

use crate::coretypes::{Square, MAX_PIECES, NUM_COLUMNS, NUM_ROWS};

/// Alias for inner type of Bitboard. Useful for const evaluation.
pub type BitboardKind = u64;

/// Region sizes of one side, largest first.
pub type RegionSizes = ArrayVec<u8, MAX_PIECES>;

/// Bitboard is a wrapper around a u64 integer, where each bit represents some or none
/// on its corresponding board square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) BitboardKind);

/// Bitboard Constants
impl Bitboard {
    pub const EMPTY: Bitboard = Self(0x0);
    pub const COLUMN_A: Bitboard = Self(0x0101010101010101);
    pub const COLUMN_H: Bitboard = Self(0x8080808080808080);
    pub const NOT_COLUMN_A: Bitboard = Self(!Self::COLUMN_A.0);
    pub const NOT_COLUMN_H: Bitboard = Self(!Self::COLUMN_H.0);
}

impl Bitboard {
    /// Get the internal representation of Bitboard.
    pub const fn bits(&self) -> BitboardKind {
        self.0
    }

    /// Returns true if there are no squares in self, false otherwise.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns number of squares present.
    pub const fn count_squares(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the square is set.
    pub const fn has_square(&self, square: Square) -> bool {
        self.0 & square.shift() != 0
    }

    pub fn set_square(&mut self, square: Square) {
        self.0 |= square.shift();
    }

    pub fn clear_square(&mut self, square: Square) {
        self.0 &= !square.shift();
    }

    /// Returns the lowest index square, or None if empty.
    pub fn get_lowest_square(&self) -> Option<Square> {
        Square::from_idx(self.0.trailing_zeros() as usize)
    }

    /// Clears and returns the lowest index square, or None if empty.
    pub fn pop_lowest_square(&mut self) -> Option<Square> {
        let square = self.get_lowest_square()?;
        self.clear_square(square);
        Some(square)
    }

    /// Returns every square adjacent to a square in self, in all 8 directions,
    /// plus the squares of self.
    pub const fn dilate(&self) -> Self {
        let bb = self.0;
        let east = (bb << 1) & Self::NOT_COLUMN_A.0;
        let west = (bb >> 1) & Self::NOT_COLUMN_H.0;
        let row = bb | east | west;
        Self(row | (row << 8) | (row >> 8))
    }

    /// Returns the set of squares in `within` that are reachable from `seed`
    /// through chains of adjacent squares of `within`.
    pub fn flood_fill(seed: Self, within: Self) -> Self {
        let mut filled = seed & within;
        loop {
            let next = filled.dilate() & within;
            if next == filled {
                return filled;
            }
            filled = next;
        }
    }

    /// Sizes of the connected regions of self, largest first.
    pub fn region_sizes(&self) -> RegionSizes {
        let mut remaining = *self;
        let mut sizes = RegionSizes::new();
        while let Some(square) = remaining.get_lowest_square() {
            let region = Self::flood_fill(Bitboard::from(square), remaining);
            sizes.push(region.count_squares() as u8);
            remaining &= !region;
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Returns true if self forms exactly one connected region.
    pub fn is_contiguous(&self) -> bool {
        match self.get_lowest_square() {
            Some(square) => Self::flood_fill(Bitboard::from(square), *self) == *self,
            None => false,
        }
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Self(square.shift())
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        iter.into_iter().for_each(|square| bb.set_square(square));
        bb
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
impl BitAnd for Bitboard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}
impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Iterates the squares of a Bitboard from lowest index to highest.
pub struct BitboardSquareIterator {
    bb: Bitboard,
}

impl Iterator for BitboardSquareIterator {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        self.bb.pop_lowest_square()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardSquareIterator;
    fn into_iter(self) -> Self::IntoIter {
        BitboardSquareIterator { bb: self }
    }
}

/// Print the Bitboard as a grid, row 8 at the top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..NUM_ROWS as u8).rev() {
            for column in 0..NUM_COLUMNS as u8 {
                let square = Square::new(column, row).ok_or(fmt::Error)?;
                let ch = if self.has_square(square) { 'X' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
