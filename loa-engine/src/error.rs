//! LOA Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// LOA Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for LOA engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Square parse string malformed.
    ParseSquareMalformed,
    /// Column parse string malformed.
    ParseColumnMalformed,
    /// Row parse string malformed.
    ParseRowMalformed,
    /// Side parse string malformed.
    ParseSideMalformed,
    /// Move notation malformed.
    ParseMoveMalformed,
    /// Board layout string malformed.
    ParseLayoutMalformed,

    /// A move was provided that is not legal in the position it was applied to.
    IllegalMove,
    /// A move was requested after the game ended.
    GameOver,
    /// Move limit must exceed the number of moves already made.
    MoveLimitInvalid,
    /// There is no move in the game history to take back.
    NoHistory,
    /// A side has more pieces than the game allows, or both sides share a square.
    PiecesInvalid,

    /// Engine was asked to move for a side that is not to move.
    EngineWrongTurn,
    /// Search depth must be at least 1.
    EngineDepthInvalid,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseColumnMalformed => "parse column malformed",
            ErrorKind::ParseRowMalformed => "parse row malformed",
            ErrorKind::ParseSideMalformed => "parse side malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",
            ErrorKind::ParseLayoutMalformed => "parse layout malformed",

            ErrorKind::IllegalMove => "illegal move",
            ErrorKind::GameOver => "game over",
            ErrorKind::MoveLimitInvalid => "move limit invalid",
            ErrorKind::NoHistory => "no history",
            ErrorKind::PiecesInvalid => "pieces invalid",

            ErrorKind::EngineWrongTurn => "engine wrong turn",
            ErrorKind::EngineDepthInvalid => "engine depth invalid",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the LOA Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error, regardless of any attached message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind)
            | Error::Message(error_kind, _)
            | Error::Custom(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
