//! Game structure.

use std::fmt::{self, Display};

use crate::board::Board;
use crate::coretypes::{Move, MoveCount, Outcome};
use crate::error::{self, ErrorKind};
use crate::movelist::{display, MoveHistory};

/// Game contains information for an in progress game:
/// The base board the game started from, the sequence of moves that were
/// played, and the current board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    pub base_board: Board,
    pub moves: MoveHistory,
    pub board: Board,
}

impl Game {
    /// Create a new Game from a base board and a sequence of moves.
    /// This generates the current board by applying the sequence of moves to the base.
    /// If a move in the move history was illegal, Err is returned.
    pub fn new(base_board: Board, moves: MoveHistory) -> error::Result<Self> {
        let mut board = base_board;
        for move_ in &moves {
            board.do_legal_move(*move_)?;
        }

        Ok(Self {
            base_board,
            moves,
            board,
        })
    }

    /// Create a new game in the standard start position.
    pub fn start_position() -> Self {
        Self::from(Board::start_position())
    }

    /// Play a move on the current board, recording it in the history.
    pub fn do_move(&mut self, move_: Move) -> error::Result<()> {
        self.board.do_legal_move(move_)?;
        self.moves.push(move_);
        Ok(())
    }

    /// Take back the last move played. The board is rebuilt from the base board.
    pub fn undo(&mut self) -> error::Result<Move> {
        let move_ = self
            .moves
            .pop()
            .ok_or((ErrorKind::NoHistory, "no moves to undo"))?;

        let mut board = self.base_board;
        for past_move in &self.moves {
            board.do_move(*past_move);
        }
        self.board = board;
        Ok(move_)
    }

    /// Change the number of moves after which the game is drawn.
    pub fn set_move_limit(&mut self, move_limit: MoveCount) -> error::Result<()> {
        self.board.set_move_limit(move_limit)?;
        self.base_board.set_move_limit(move_limit)
    }

    /// Returns how the game ended, or None if it is still in progress.
    pub fn winner(&self) -> Option<Outcome> {
        self.board.winner()
    }

    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }
}

/// Convert a board to a Game with no past moves.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self {
            base_board: board,
            moves: MoveHistory::new(),
            board,
        }
    }
}

/// Displays the current board followed by the moves played so far.
impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "Moves: {}", display(&self.moves))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::start_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Side;

    fn moves(notation: &[&str]) -> MoveHistory {
        notation.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn new_replays_history() {
        let game = Game::new(Board::start_position(), moves(&["b1-b3", "a2-c2"])).unwrap();
        assert_eq!(game.board.moves_made(), 2);
        assert_eq!(game.board.turn(), Side::Black);
        assert_eq!(game.moves.len(), 2);

        let err = Game::new(Board::start_position(), moves(&["b1-b2"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
    }

    #[test]
    fn do_move_and_undo() {
        let mut game = Game::start_position();
        let start = game.board;

        game.do_move("b1-b3".parse().unwrap()).unwrap();
        game.do_move("a2-c2".parse().unwrap()).unwrap();
        let after_one = Game::new(start, moves(&["b1-b3"])).unwrap();

        assert_eq!(game.undo().unwrap(), "a2-c2".parse().unwrap());
        assert_eq!(game, after_one);
        game.undo().unwrap();
        assert_eq!(game.board, start);
        assert_eq!(game.undo().unwrap_err().kind(), ErrorKind::NoHistory);
    }

    #[test]
    fn illegal_move_leaves_game_unchanged() {
        let mut game = Game::start_position();
        let err = game.do_move("c1-c2".parse().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        assert_eq!(game, Game::start_position());
    }

    #[test]
    fn display_lists_moves() {
        let game = Game::new(Board::start_position(), moves(&["b1-b3", "a2-c2"])).unwrap();
        assert!(game.to_string().ends_with("Moves: b1-b3 a2-c2"));
    }

    #[test]
    fn move_limit_survives_undo() {
        let mut game = Game::start_position();
        game.set_move_limit(2).unwrap();
        game.do_move("b1-b3".parse().unwrap()).unwrap();
        game.undo().unwrap();
        assert_eq!(game.board.move_limit(), 2);

        game.do_move("b1-b3".parse().unwrap()).unwrap();
        assert_eq!(game.set_move_limit(1).unwrap_err().kind(), ErrorKind::MoveLimitInvalid);
        game.do_move("a2-c2".parse().unwrap()).unwrap();
        assert_eq!(game.winner(), Some(Outcome::Draw));
    }
}
