//! Holds Board struct, the Lines of Action position used by the engine.

use std::fmt::{self, Display};

use crate::bitboard::{Bitboard, RegionSizes};
use crate::coretypes::{MoveCount, Outcome, Side, Square, DEFAULT_MOVE_LIMIT};
use crate::coretypes::{Move, MAX_PIECES, NUM_COLUMNS, NUM_ROWS};
use crate::error::{self, ErrorKind};
use crate::fen::Fen;
use crate::movegen as mg;
use crate::movelist::MoveList;
use crate::position::Position;

/// struct Board
/// A complete data set that can represent any Lines of Action position.
/// # Members:
/// * pieces - one Bitboard of piece squares per side, indexed by `Side::index`.
/// * turn - Side whose turn it is.
/// * moves_made - Number of moves made by both sides so far.
/// * move_limit - The game is drawn once `moves_made` reaches this value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    pub(crate) pieces: [Bitboard; 2],
    pub(crate) turn: Side,
    pub(crate) moves_made: MoveCount,
    pub(crate) move_limit: MoveCount,
}

impl Board {
    /// Standard start position: Black on rows 1 and 8, White on columns a and h,
    /// corners empty. Black moves first.
    pub fn start_position() -> Self {
        let black: Bitboard = (1..7u8)
            .flat_map(|column| [Square::new(column, 0), Square::new(column, 7)])
            .flatten()
            .collect();
        let white: Bitboard = (1..7u8)
            .flat_map(|row| [Square::new(0, row), Square::new(7, row)])
            .flatten()
            .collect();

        Self {
            pieces: [black, white],
            turn: Side::Black,
            moves_made: 0,
            move_limit: DEFAULT_MOVE_LIMIT,
        }
    }

    /// A board from explicit piece sets, with no moves made yet.
    /// Each side may have at most `MAX_PIECES` pieces, and no square may hold both sides.
    pub fn from_pieces(black: Bitboard, white: Bitboard, turn: Side) -> error::Result<Self> {
        for (side, pieces) in [(Side::Black, black), (Side::White, white)] {
            if pieces.count_squares() as usize > MAX_PIECES {
                return Err((
                    ErrorKind::PiecesInvalid,
                    format!("{side} has {} pieces", pieces.count_squares()),
                )
                    .into());
            }
        }
        if !(black & white).is_empty() {
            return Err((ErrorKind::PiecesInvalid, "sides overlap").into());
        }

        Ok(Self {
            pieces: [black, white],
            turn,
            moves_made: 0,
            move_limit: DEFAULT_MOVE_LIMIT,
        })
    }

    /// Getters.
    pub fn pieces(&self, side: Side) -> Bitboard {
        self.pieces[side.index()]
    }
    pub fn occupied(&self) -> Bitboard {
        self.pieces[0] | self.pieces[1]
    }
    pub fn turn(&self) -> Side {
        self.turn
    }
    pub fn moves_made(&self) -> MoveCount {
        self.moves_made
    }
    pub fn move_limit(&self) -> MoveCount {
        self.move_limit
    }

    /// Returns the side with a piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Side> {
        Side::iter()
            .into_iter()
            .find(|side| self.pieces(*side).has_square(square))
    }

    /// Set the number of moves after which the game is drawn.
    /// The limit must be greater than the number of moves already made.
    pub fn set_move_limit(&mut self, move_limit: MoveCount) -> error::Result<()> {
        if move_limit <= self.moves_made {
            return Err((
                ErrorKind::MoveLimitInvalid,
                format!("{move_limit} moves already reached"),
            )
                .into());
        }
        self.move_limit = move_limit;
        Ok(())
    }

    /// Set the number of moves already made, for positions set up mid-game.
    pub fn set_moves_made(&mut self, moves_made: MoveCount) -> error::Result<()> {
        if moves_made >= self.move_limit {
            return Err((
                ErrorKind::MoveLimitInvalid,
                format!("{moves_made} moves reaches limit {}", self.move_limit),
            )
                .into());
        }
        self.moves_made = moves_made;
        Ok(())
    }

    /// Returns a list of all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        mg::legal_moves(self.pieces(self.turn), self.pieces(!self.turn))
    }

    /// Checks if move is legal for the side to move in the current position.
    pub fn is_legal_move(&self, move_: Move) -> bool {
        mg::is_legal(self.pieces(self.turn), self.pieces(!self.turn), move_)
    }

    /// Apply a move to self, in place.
    /// `do_move` does not check if the move is legal or not,
    /// it simply executes it while assuming legality.
    /// The piece on `from` is moved to `to`, capturing any opposing piece there.
    pub fn do_move(&mut self, move_: Move) {
        let active = self.turn.index();
        let passive = (!self.turn).index();

        self.pieces[active].clear_square(move_.from);
        self.pieces[active].set_square(move_.to);
        self.pieces[passive].clear_square(move_.to);

        self.turn = !self.turn;
        self.moves_made += 1;
    }

    /// Checks if move is legal and the game is not over before applying it.
    pub fn do_legal_move(&mut self, move_: Move) -> error::Result<()> {
        if self.game_over() {
            return Err((ErrorKind::GameOver, move_).into());
        }
        if !self.is_legal_move(move_) {
            return Err((ErrorKind::IllegalMove, move_).into());
        }
        self.do_move(move_);
        Ok(())
    }

    /// Generates a new Board from applying move on current Board.
    pub fn make_move(&self, move_: Move) -> Self {
        let mut board_clone = *self;
        board_clone.do_move(move_);
        board_clone
    }

    /// Returns true if all pieces of `side` are connected. A side with no pieces is not.
    pub fn pieces_contiguous(&self, side: Side) -> bool {
        self.pieces(side).is_contiguous()
    }

    /// Sizes of the connected regions of `side`, largest first.
    pub fn region_sizes(&self, side: Side) -> RegionSizes {
        self.pieces(side).region_sizes()
    }

    /// Returns how the game ended, or None if it is still in progress.
    ///
    /// The side that just moved wins if its pieces are contiguous, even when
    /// the move also joined the opponent's pieces. Otherwise the opponent wins
    /// if its pieces are contiguous. Without a winner, the game is drawn once the
    /// move limit is reached or the side to move has no legal moves.
    pub fn winner(&self) -> Option<Outcome> {
        let mover = !self.turn;
        if self.pieces_contiguous(mover) {
            Some(Outcome::Win(mover))
        } else if self.pieces_contiguous(self.turn) {
            Some(Outcome::Win(self.turn))
        } else if self.moves_made >= self.move_limit || self.legal_moves().is_empty() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns true if the game has ended.
    pub fn game_over(&self) -> bool {
        self.winner().is_some()
    }
}

/// Defaults to the standard start position.
impl Default for Board {
    fn default() -> Self {
        Self::start_position()
    }
}

impl Position for Board {
    type Move = Move;
    type Moves = MoveList;

    fn legal_moves(&self) -> MoveList {
        Board::legal_moves(self)
    }
    fn do_move(&mut self, move_: Move) {
        Board::do_move(self, move_)
    }
    fn game_over(&self) -> bool {
        Board::game_over(self)
    }
    fn moves_made(&self) -> MoveCount {
        self.moves_made
    }
    fn turn(&self) -> Side {
        self.turn
    }
    fn pieces_contiguous(&self, side: Side) -> bool {
        Board::pieces_contiguous(self, side)
    }
    fn piece_count(&self, side: Side) -> u32 {
        self.pieces(side).count_squares()
    }
    fn region_sizes(&self, side: Side) -> RegionSizes {
        Board::region_sizes(self, side)
    }
}

/// Displays a diagram of the board with row 8 at the top, followed by its layout string.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in (0..NUM_ROWS as u8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..NUM_COLUMNS as u8 {
                let square = Square::new(column, row).ok_or(fmt::Error)?;
                let ch = self.piece_at(square).map_or('-', |side| side.to_char());
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f, "Next move: {}", self.turn.name())?;
        write!(f, "Layout: {}", self.to_fen())
    }
}
