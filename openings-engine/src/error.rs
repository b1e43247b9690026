//! Openings Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Openings Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the Openings engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Square parse string malformed.
    ParseSquareMalformed,
    /// File parse string malformed.
    ParseFileMalformed,
    /// Rank parse string malformed.
    ParseRankMalformed,
    /// Color parse string malformed.
    ParseColorMalformed,
    /// Piece parse string malformed.
    ParsePieceMalformed,
    /// Castling parse string malformed.
    ParseCastlingMalformed,
    /// Coordinate notation move malformed.
    ParseMoveMalformed,

    /// Fen string does not have exactly 6 space separated fields.
    FenFieldCount,
    /// Fen piece placement field malformed.
    FenPlacement,
    /// Fen side to move, castling, or en passant field malformed.
    FenState,
    /// Fen halfmove clock or fullmove number malformed.
    FenCounters,

    /// Move token is not readable as algebraic or coordinate notation.
    SanMalformed,
    /// Move token was readable but no legal move matches it.
    SanIllegal,
    /// Move token matches more than one legal move.
    SanAmbiguous,

    /// Requested ply index is outside of [-1, N-1] for a move sequence of length N.
    PlyOutOfRange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseSquareMalformed => "parse square malformed",
            ErrorKind::ParseFileMalformed => "parse file malformed",
            ErrorKind::ParseRankMalformed => "parse rank malformed",
            ErrorKind::ParseColorMalformed => "parse color malformed",
            ErrorKind::ParsePieceMalformed => "parse piece malformed",
            ErrorKind::ParseCastlingMalformed => "parse castling malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",

            ErrorKind::FenFieldCount => "fen field count",
            ErrorKind::FenPlacement => "fen placement malformed",
            ErrorKind::FenState => "fen state malformed",
            ErrorKind::FenCounters => "fen counters malformed",

            ErrorKind::SanMalformed => "san malformed",
            ErrorKind::SanIllegal => "san illegal move",
            ErrorKind::SanAmbiguous => "san ambiguous move",

            ErrorKind::PlyOutOfRange => "ply index out of range",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Openings Engine.
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

    /// Returns the kind of this error, regardless of attached context.
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
