//! The fundamental and simple types of `loa_engine`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::ops::{Neg, Not};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_COLUMNS: usize = 8; // a, b, c, d, e, f, g, h
pub const NUM_ROWS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_COLUMNS * NUM_ROWS;

/// Each side starts with 12 pieces and can never gain more.
pub const MAX_PIECES: usize = 12;

// Every piece may move in at most one way along each of the 8 directions.
pub const MAX_MOVES: usize = MAX_PIECES * 8;

/// Number of moves (by both sides together) after which a game is drawn.
pub const DEFAULT_MOVE_LIMIT: MoveCount = 60;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Counter for moves made in a game.
pub type MoveCount = u32;

/// Type alias for search depth in plies.
pub type PlyKind = u8;

// Type alias to make changing Score inner type easy if needed.
pub type ScoreKind = i32;

/// Heuristic value of a position. Positive values favor White, negative favor Black.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub ScoreKind);

/// A side can represent the color of a piece, or a player.
/// White is the light side and Black the dark side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Black,
    White,
}

/// Whether a search node maximizes or minimizes the Score.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sense {
    Maximizing,
    Minimizing,
}

/// Square
/// One of the 64 squares of the board, stored as `row * 8 + column`,
/// so a1 = 0, h1 = 7, a2 = 8 and h8 = 63.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

/// The 8 directions a piece may move along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[rustfmt::skip]
pub enum Direction {
    North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
}

/// How a finished game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// Move
/// A piece moving from one square to another, written as `c1-c3`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
}

//////////////////////
/// Implementations //
//////////////////////

impl Score {
    /// Magnitude of a detected win.
    pub const WINNING: Score = Self(ScoreKind::MAX - 20);
    /// Greater than any value a position can have.
    pub const INFINITY: Score = Self(ScoreKind::MAX);

    pub const fn new(value: ScoreKind) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> ScoreKind {
        self.0
    }

    /// Returns the sign of the Score, either 1, -1, or 0.
    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }

    /// Returns true if this score reports a detected win for either side.
    pub const fn is_win(&self) -> bool {
        self.0 >= Self::WINNING.0 || self.0 <= -Self::WINNING.0
    }

    /// Returns the side this score favors, or None if even.
    pub const fn leading(&self) -> Option<Side> {
        match self.signum() {
            1 => Some(Side::White),
            -1 => Some(Side::Black),
            _ => None,
        }
    }
}

impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self >= Self::WINNING {
            f.write_str("+win")
        } else if *self <= -Self::WINNING {
            f.write_str("-win")
        } else {
            write!(f, "{:+}", self.0)
        }
    }
}

impl Side {
    pub const fn to_char(&self) -> char {
        match self {
            Side::Black => 'b',
            Side::White => 'w',
        }
    }

    /// Full lowercase name of a side, as used in commands.
    pub const fn name(&self) -> &'static str {
        match self {
            Side::Black => "black",
            Side::White => "white",
        }
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub const fn index(&self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    pub const fn iter() -> [Side; 2] {
        [Side::Black, Side::White]
    }
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl From<Side> for char {
    fn from(side: Side) -> Self {
        side.to_char()
    }
}

impl TryFrom<char> for Side {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'b' => Ok(Side::Black),
            'w' => Ok(Side::White),
            _ => Err((ErrorKind::ParseSideMalformed, "char is not b|w").into()),
        }
    }
}

/// Side ::= "b" | "w" | "black" | "white", case-insensitive.
impl FromStr for Side {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Side::Black),
            "w" | "white" => Ok(Side::White),
            _ => Err((ErrorKind::ParseSideMalformed, s).into()),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Side::Black => "Black",
            Side::White => "White",
        })
    }
}

impl Sense {
    pub const fn flip(&self) -> Self {
        match self {
            Sense::Maximizing => Sense::Minimizing,
            Sense::Minimizing => Sense::Maximizing,
        }
    }

    /// Returns true if `value` is strictly better than `current` for this sense.
    pub fn improves(&self, value: Score, current: Score) -> bool {
        match self {
            Sense::Maximizing => value > current,
            Sense::Minimizing => value < current,
        }
    }

    /// The worst possible value for this sense, used to seed a running best.
    pub const fn worst(&self) -> Score {
        match self {
            Sense::Maximizing => Score(-Score::INFINITY.0),
            Sense::Minimizing => Score::INFINITY,
        }
    }
}

/// White is the positive side, so White maximizes and Black minimizes.
impl From<Side> for Sense {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Sense::Maximizing,
            Side::Black => Sense::Minimizing,
        }
    }
}

impl Square {
    /// Create a square from a 0-based column and row, or None if off the board.
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if (column as usize) < NUM_COLUMNS && (row as usize) < NUM_ROWS {
            Some(Self(row * NUM_COLUMNS as u8 + column))
        } else {
            None
        }
    }

    /// Create a square from its index 0-63, or None if out of range.
    pub const fn from_idx(idx: usize) -> Option<Self> {
        if idx < NUM_SQUARES {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    pub const fn idx(&self) -> usize {
        self.0 as usize
    }

    /// 0-based column, where column a = 0.
    pub const fn column(&self) -> u8 {
        self.0 % NUM_COLUMNS as u8
    }

    /// 0-based row, where row 1 = 0.
    pub const fn row(&self) -> u8 {
        self.0 / NUM_COLUMNS as u8
    }

    /// Bit of this square in a 64 bit board.
    pub const fn shift(&self) -> u64 {
        1u64 << self.0
    }

    /// Returns the square `steps` squares away in `direction`, or None if it falls off the board.
    pub const fn step(&self, direction: Direction, steps: i8) -> Option<Self> {
        let (dc, dr) = direction.delta();
        let column = self.column() as i8 + dc * steps;
        let row = self.row() as i8 + dr * steps;
        if column < 0 || row < 0 {
            return None;
        }
        Self::new(column as u8, row as u8)
    }

    /// Iterate all squares from a1 to h8.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char((b'a' + self.column()) as char)?;
        f.write_char((b'1' + self.row()) as char)
    }
}

/// Square ::= Column Row, where Column ::= [a-h] and Row ::= [1-8].
impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.chars();
        let column_ch = chars
            .next()
            .ok_or((ErrorKind::ParseSquareMalformed, "empty square"))?;
        let row_ch = chars
            .next()
            .ok_or((ErrorKind::ParseSquareMalformed, "missing row"))?;
        if chars.next().is_some() {
            return Err((ErrorKind::ParseSquareMalformed, s).into());
        }

        let column = match column_ch {
            'a'..='h' => column_ch as u8 - b'a',
            _ => return Err((ErrorKind::ParseColumnMalformed, column_ch).into()),
        };
        let row = match row_ch {
            '1'..='8' => row_ch as u8 - b'1',
            _ => return Err((ErrorKind::ParseRowMalformed, row_ch).into()),
        };
        Square::new(column, row).ok_or_else(|| (ErrorKind::ParseSquareMalformed, s).into())
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (column, row) change of one step in this direction.
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl Outcome {
    /// The winning side, or None for a draw.
    pub const fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Draw => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{side} wins."),
            Outcome::Draw => f.write_str("Tie."),
        }
    }
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub const fn from(&self) -> Square {
        self.from
    }

    pub const fn to(&self) -> Square {
        self.to
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Move ::= Square "-" Square, for example `c1-c3`.
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let (from, to) = s
            .trim()
            .split_once('-')
            .ok_or((ErrorKind::ParseMoveMalformed, s))?;
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_parse_display() {
        let c3: Square = "c3".parse().unwrap();
        assert_eq!(c3.column(), 2);
        assert_eq!(c3.row(), 2);
        assert_eq!(c3.idx(), 18);
        assert_eq!(c3.to_string(), "c3");

        assert_eq!("h8".parse::<Square>().unwrap().idx(), 63);
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a12".parse::<Square>().is_err());
    }

    #[test]
    fn square_step() {
        let d4: Square = "d4".parse().unwrap();
        assert_eq!(d4.step(Direction::NorthEast, 2), "f6".parse().ok());
        assert_eq!(d4.step(Direction::West, 3), "a4".parse().ok());
        assert_eq!(d4.step(Direction::West, 4), None);
        assert_eq!(d4.step(Direction::South, 4), None);
    }

    #[test]
    fn move_notation() {
        let move_: Move = "b1-b3".parse().unwrap();
        assert_eq!(move_.from().to_string(), "b1");
        assert_eq!(move_.to().to_string(), "b3");
        assert_eq!(move_.to_string(), "b1-b3");
        assert!("b1b3".parse::<Move>().is_err());
        assert!("b1-z3".parse::<Move>().is_err());
    }

    #[test]
    fn side_sense_mapping() {
        assert_eq!(Sense::from(Side::White), Sense::Maximizing);
        assert_eq!(Sense::from(Side::Black), Sense::Minimizing);
        assert_eq!(Sense::from(!Side::White), Sense::Maximizing.flip());
        assert_eq!("White".parse::<Side>().unwrap(), Side::White);
        assert_eq!("b".parse::<Side>().unwrap(), Side::Black);
    }

    #[test]
    fn sense_improves() {
        let max = Sense::Maximizing;
        let min = Sense::Minimizing;
        assert!(max.improves(Score(1), max.worst()));
        assert!(min.improves(Score(-1), min.worst()));
        assert!(!max.improves(Score(3), Score(3)));
        assert!(min.improves(Score(-5), Score(0)));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::WINNING.to_string(), "+win");
        assert_eq!((-Score::WINNING).to_string(), "-win");
        assert_eq!(Score(3).to_string(), "+3");
        assert_eq!(Score(-1).to_string(), "-1");
        assert_eq!(Score(0).leading(), None);
        assert_eq!((-Score::WINNING).leading(), Some(Side::Black));
    }

    #[test]
    fn outcome_winner() {
        assert_eq!(Outcome::Win(Side::White).winner(), Some(Side::White));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Win(Side::Black).to_string(), "Black wins.");
        assert_eq!(Outcome::Draw.to_string(), "Tie.");
    }
}
