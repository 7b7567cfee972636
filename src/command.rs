//! Commands read from the player at the game prompt.

use loa_engine::coretypes::{Move, MoveCount, Side};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Play a move for the side to move, in `c1-c3` notation.
    GameMove(Move),
    /// Abandon the current game and start from the initial position.
    New,
    /// Take back moves until a manual player is to move.
    Undo,
    /// Let the engine play a side.
    Auto(Side),
    /// Read moves for a side from the prompt.
    Manual(Side),
    /// Reseed random evaluation.
    Seed(u64),
    /// Change the move limit of the current game.
    Limit(MoveCount),
    /// Print the board.
    Dump,
    Help,
    Quit,
    /// Empty line.
    Nothing,
    Invalid(String),
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        let mut words = s.split_whitespace();
        let (Some(first), argument, None) = (words.next(), words.next(), words.next()) else {
            return match s.trim() {
                "" => Self::Nothing,
                other => Self::Invalid(format!("too many arguments: {other}")),
            };
        };

        if argument.is_none() {
            if let Ok(move_) = first.parse::<Move>() {
                return Self::GameMove(move_);
            }
        }

        match (first, argument) {
            ("new", None) => Self::New,
            ("undo", None) => Self::Undo,
            ("dump", None) => Self::Dump,
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("auto", Some(side)) => side.parse().map_or_else(|_| invalid_side(side), Self::Auto),
            ("manual", Some(side)) => side
                .parse()
                .map_or_else(|_| invalid_side(side), Self::Manual),
            ("seed", Some(seed)) => seed
                .parse()
                .map_or_else(|_| Self::Invalid(format!("bad seed: {seed}")), Self::Seed),
            ("limit", Some(limit)) => limit
                .parse()
                .map_or_else(|_| Self::Invalid(format!("bad move limit: {limit}")), Self::Limit),
            _ => Self::Invalid(format!("unknown command: {}", s.trim())),
        }
    }
}

fn invalid_side(side: &str) -> Command {
    Command::Invalid(format!("expected black or white, found {side}"))
}

pub const HELP: &str = "\
Commands:
c1-c3          => Move the piece on c1 to c3.
new            => Begin a new game.
undo           => Take back moves until it is your turn again.
auto SIDE      => Let the engine play SIDE (black or white).
manual SIDE    => Enter moves for SIDE yourself.
seed N         => Reseed the engine's random evaluation, if enabled.
limit N        => Draw the game after N moves in total.
dump           => Print the board.
help           => Print this help text.
quit           => End the program.";
