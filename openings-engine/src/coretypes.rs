//! The fundamental and simple types of `openings_engine`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::ops::{BitOr, Not};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: usize = 8; // A, B, C, D, E, F, G, H
pub const NUM_RANKS: usize = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_FILES * NUM_RANKS;

// Pawn, Knight, Bishop, Rook, Queen, King.
pub const NUM_PIECE_KINDS: usize = 6;

// The max measured number of legal moves for any chess position is 218.
// Pseudo-legal generation shares the same list, so leave some headroom.
pub const MAX_MOVES: usize = 256;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for perft depth.
pub type PlyKind = u8;

/// Counter for half-move clock and full-moves.
pub type MoveCount = u16;

/// Color can represent the color of a piece, or a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

/// Enum variant order and discriminant are important.
/// Must be contiguous and start from 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) piece_kind: PieceKind,
}

/// Observe Castling rights for a position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Castling(u8);

/// Castling Enum constants.
impl Castling {
    pub const W_KING: Castling = Castling(0b00000001);
    pub const W_QUEEN: Castling = Castling(0b00000010);
    pub const B_KING: Castling = Castling(0b00000100);
    pub const B_QUEEN: Castling = Castling(0b00001000);
    pub const W_SIDE: Castling = Castling(Self::W_KING.0 | Self::W_QUEEN.0);
    pub const B_SIDE: Castling = Castling(Self::B_KING.0 | Self::B_QUEEN.0);
    pub const ALL: Castling = Castling(Self::W_SIDE.0 | Self::B_SIDE.0);
    pub const NONE: Castling = Castling(0u8);
}

/// Enum variant order and discriminant must be contiguous, start from 0,
/// and be in ascending order ABCDEFGH.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum File {
    A, B, C, D, E, F, G, H = 7u8,
}

/// Enum variant order and discriminant must be contiguous, start from 0,
/// and be in ascending order 12345678.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Rank {
    R1, R2, R3, R4, R5, R6, R7, R8 = 7u8,
}

/// Square
/// Every possible square on a chess board.
/// The order of enums is important, as `Square::A1 as u8` corresponds to
/// that Square's bit position in a bitboard.
/// WARNING: The exact ordering of enums is important for their discriminants.
///          Changing the discriminant of any variant is breaking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8 = 63u8,
}

/// Move
/// Coordinate form of moving a single chess piece.
/// Equivalent to a chess "half move", or "ply".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) promotion: Option<PieceKind>,
}

/// Enum describing the kind of a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveKind {
    /// Move resulted in a capture.
    Capture(PieceKind),
    /// No special moves or captures, simply moved to empty square.
    Quiet,
    /// This move was the special castling move.
    Castle,
    /// En passant capture.
    EnPassant,
}

/// MoveInfo contains extra properties of a move in context of an existing position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MoveInfo {
    /// Original square of moving piece.
    pub(crate) from: Square,
    /// Target square of moving piece.
    pub(crate) to: Square,
    /// Promotion piece kind.
    pub(crate) promotion: Option<PieceKind>,
    /// Kind of the piece that was moved.
    pub(crate) piece_kind: PieceKind,
    /// Flag if move was a regular or special move.
    pub(crate) move_kind: MoveKind,
}

////////////
// Traits //
////////////

/// SquareIndexable
/// A chessboard has 64 squares on it. SquareIndexable can be implemented
/// for types whose values can map directly to a chess Square's index.
pub trait SquareIndexable {
    /// idx(&self) must return a number between 0-63 inclusive, representing
    /// a square on a chess board in little-endian, rank-file order.
    fn idx(&self) -> usize;

    /// shift returns a number that represents the bit-index equivalent of a
    /// chess Square on a u64.
    fn shift(&self) -> u64 {
        1u64 << self.idx()
    }
}

// Blanket impl on references of types that are SquareIndexable.
impl<I: SquareIndexable> SquareIndexable for &I {
    fn idx(&self) -> usize {
        I::idx(*self)
    }
}

//////////////////////
// Implementations //
//////////////////////

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// FEN compliant conversion.
    pub const fn to_char(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        color.to_char()
    }
}

impl TryFrom<char> for Color {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err((ErrorKind::ParseColorMalformed, "char is not w|b").into()),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; NUM_PIECE_KINDS] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// FEN compliant conversion, defaults as white pieces.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Algebraic notation piece letter. Pawns have no letter.
    pub const fn from_san_char(ch: char) -> Option<Self> {
        match ch {
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if a pawn may promote to this PieceKind.
    pub const fn is_promotable(&self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl Piece {
    pub const fn new(color: Color, piece_kind: PieceKind) -> Self {
        Piece { color, piece_kind }
    }
    /// Immutable Getters.
    pub const fn color(&self) -> &Color {
        &self.color
    }
    pub const fn piece_kind(&self) -> &PieceKind {
        &self.piece_kind
    }

    pub const fn to_char(&self) -> char {
        match self.color {
            Color::White => self.piece_kind.to_char(),
            Color::Black => self.piece_kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl TryFrom<char> for Piece {
    type Error = error::Error;
    fn try_from(value: char) -> error::Result<Self> {
        let color = match value.is_ascii_uppercase() {
            true => Color::White,
            false => Color::Black,
        };
        let piece_kind = match value.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => {
                return Err((
                    ErrorKind::ParsePieceMalformed,
                    "char is not in PNBRQKpnbrqk",
                )
                    .into())
            }
        };
        Ok(Piece { color, piece_kind })
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl Castling {
    /// Make new Castling with all rights of initial chess position.
    pub const fn start_position() -> Self {
        Self::ALL
    }

    /// Returns true if there are no castling rights.
    pub const fn is_none(&self) -> bool {
        self.0 == 0u8
    }

    /// Returns true if Castling mask has all of provided bits.
    pub fn has(&self, rights: Castling) -> bool {
        self.0 & rights.0 == rights.0
    }

    /// Set given bits to '1' on Castling mask.
    pub fn set(&mut self, rights: Castling) {
        self.0 |= rights.0;
    }

    /// Set given bits to '0' on Castling mask.
    pub fn clear(&mut self, rights: Castling) {
        self.0 &= !rights.0;
    }

    /// Removes all castling rights for a color.
    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => self.clear(Self::W_SIDE),
            Color::Black => self.clear(Self::B_SIDE),
        }
    }

    /// Removes the castling right tied to a rook home square.
    /// Called for both the origin and target square of every move,
    /// which covers rooks moving away and rooks being captured.
    pub fn clear_rook_square(&mut self, square: Square) {
        match square {
            Square::A1 => self.clear(Self::W_QUEEN),
            Square::H1 => self.clear(Self::W_KING),
            Square::A8 => self.clear(Self::B_QUEEN),
            Square::H8 => self.clear(Self::B_KING),
            _ => (),
        }
    }
}

/// Defaults to Castling rights for starting chess position, ALL.
impl Default for Castling {
    fn default() -> Self {
        Self::start_position()
    }
}

impl BitOr for Castling {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Displays in FEN-component format.
impl Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_none() {
            return f.write_char('-');
        }
        for (rights, ch) in [
            (Self::W_KING, 'K'),
            (Self::W_QUEEN, 'Q'),
            (Self::B_KING, 'k'),
            (Self::B_QUEEN, 'q'),
        ] {
            if self.has(rights) {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

/// Castling ::= '-' | ['K'] ['Q'] ['k'] ['q']
impl FromStr for Castling {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        if s == "-" {
            return Ok(Castling::NONE);
        }
        if s.is_empty() || s.len() > 4 {
            return Err((ErrorKind::ParseCastlingMalformed, "expected - or 1-4 of KQkq").into());
        }

        let mut castling_rights = Castling::NONE;
        for ch in s.chars() {
            match ch {
                'K' => castling_rights.set(Self::W_KING),
                'Q' => castling_rights.set(Self::W_QUEEN),
                'k' => castling_rights.set(Self::B_KING),
                'q' => castling_rights.set(Self::B_QUEEN),
                _ => return Err((ErrorKind::ParseCastlingMalformed, "char not of KQkq").into()),
            };
        }
        Ok(castling_rights)
    }
}

impl File {
    pub const ALL: [File; NUM_FILES] = {
        use File::*;
        [A, B, C, D, E, F, G, H]
    };

    /// File enum variants cover all u8 values from 0-7 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < NUM_FILES {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }
    /// Get the character representation of File, in lowercase.
    pub const fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl Rank {
    pub const ALL: [Rank; NUM_RANKS] = {
        use Rank::*;
        [R1, R2, R3, R4, R5, R6, R7, R8]
    };

    /// Rank enum variants cover all u8 values from 0-7 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < NUM_RANKS {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }
    pub const fn to_char(&self) -> char {
        (b'1' + *self as u8) as char
    }
}

impl TryFrom<char> for File {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'a'..='h' => Ok(Self::ALL[(ch as u8 - b'a') as usize]),
            _ => Err((ErrorKind::ParseFileMalformed, "file char not of abcdefgh").into()),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            '1'..='8' => Ok(Self::ALL[(ch as u8 - b'1') as usize]),
            _ => Err((ErrorKind::ParseRankMalformed, "rank char not of 12345678").into()),
        }
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl SquareIndexable for (File, Rank) {
    fn idx(&self) -> usize {
        let &(file, rank) = self;
        NUM_FILES * rank as usize + file as usize
    }
}

impl Square {
    #[rustfmt::skip]
    pub const ALL: [Square; NUM_SQUARES] = {
        use Square::*;
        [
            A1, B1, C1, D1, E1, F1, G1, H1,
            A2, B2, C2, D2, E2, F2, G2, H2,
            A3, B3, C3, D3, E3, F3, G3, H3,
            A4, B4, C4, D4, E4, F4, G4, H4,
            A5, B5, C5, D5, E5, F5, G5, H5,
            A6, B6, C6, D6, E6, F6, G6, H6,
            A7, B7, C7, D7, E7, F7, G7, H7,
            A8, B8, C8, D8, E8, F8, G8, H8,
        ]
    };

    /// Square enum variants cover all u8 values from 0-63 inclusive.
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < NUM_SQUARES {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        Self::ALL.into_iter()
    }

    pub const fn file(&self) -> File {
        File::ALL[self.file_u8() as usize]
    }

    pub const fn rank(&self) -> Rank {
        Rank::ALL[self.rank_u8() as usize]
    }

    /// Returns 0-based file (0,1,2,3,4,5,6,7), not 1-based chess file.
    pub const fn file_u8(&self) -> u8 {
        *self as u8 % NUM_FILES as u8
    }

    /// Returns 0-based rank (0,1,2,3,4,5,6,7), not 1-based chess rank.
    pub const fn rank_u8(&self) -> u8 {
        *self as u8 / NUM_FILES as u8
    }

    /// Returns the Square with the Rank increased by one, "A3 -> A4".
    pub fn increment_rank(&self) -> Option<Self> {
        Rank::from_u8(self.rank_u8() + 1).map(|rank| Self::from((self.file(), rank)))
    }

    /// Returns the Square with the Rank decreased by one, "A3 -> A2".
    pub fn decrement_rank(&self) -> Option<Self> {
        Rank::from_u8(self.rank_u8().wrapping_sub(1)).map(|rank| Self::from((self.file(), rank)))
    }
}

impl TryFrom<u8> for Square {
    type Error = error::Error;
    fn try_from(value: u8) -> error::Result<Self> {
        Self::from_u8(value).ok_or_else(|| (ErrorKind::ParseSquareMalformed, value).into())
    }
}

impl From<(File, Rank)> for Square {
    fn from(coordinate: (File, Rank)) -> Self {
        Self::ALL[coordinate.idx()]
    }
}

/// Square::= <fileLetter><rankNumber>
impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut chars = s.chars();
        let file = File::try_from(chars.next().ok_or(ErrorKind::ParseSquareMalformed)?)?;
        let rank = Rank::try_from(chars.next().ok_or(ErrorKind::ParseSquareMalformed)?)?;
        if chars.next().is_some() {
            return Err((ErrorKind::ParseSquareMalformed, s).into());
        }
        Ok(Square::from((file, rank)))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl SquareIndexable for Square {
    fn idx(&self) -> usize {
        *self as usize
    }
}

impl Move {
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    // Immutable Getters
    pub const fn from(&self) -> Square {
        self.from
    }
    pub const fn to(&self) -> Square {
        self.to
    }
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

impl PartialEq<MoveInfo> for Move {
    fn eq(&self, other: &MoveInfo) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl From<MoveInfo> for Move {
    fn from(move_info: MoveInfo) -> Self {
        Self::new(move_info.from, move_info.to, move_info.promotion)
    }
}

impl MoveInfo {
    pub const fn new(move_: Move, moved_piece_kind: PieceKind, move_kind: MoveKind) -> Self {
        Self {
            from: move_.from,
            to: move_.to,
            promotion: move_.promotion,
            piece_kind: moved_piece_kind,
            move_kind,
        }
    }

    /// Get this MoveInfo's inner Move.
    pub const fn move_(&self) -> Move {
        Move::new(self.from, self.to, self.promotion)
    }

    // Immutable Getters
    pub const fn piece_kind(&self) -> &PieceKind {
        &self.piece_kind
    }
    pub const fn move_kind(&self) -> &MoveKind {
        &self.move_kind
    }

    /// Returns true if this MoveInfo came from a capturing move.
    pub fn is_capture(&self) -> bool {
        matches!(self.move_kind, MoveKind::Capture(_) | MoveKind::EnPassant)
    }

    /// Returns true if this MoveInfo came from a pawn move.
    pub fn is_pawn_move(&self) -> bool {
        self.piece_kind == PieceKind::Pawn
    }
}

/// Parses `Pure Algebraic Coordinate Notation`, e.g. `e2e4` or `e7e8q`.
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err((ErrorKind::ParseMoveMalformed, s).into());
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;

        let promotion = match s.chars().nth(4) {
            None => None,
            Some('q') => Some(PieceKind::Queen),
            Some('r') => Some(PieceKind::Rook),
            Some('b') => Some(PieceKind::Bishop),
            Some('n') => Some(PieceKind::Knight),
            Some(_) => return Err((ErrorKind::ParseMoveMalformed, s).into()),
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

/// # Example
/// Move { from: A7, to: B8, promotion: Some(Queen) } -> `a7b8q`.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece_kind) = self.promotion {
            f.write_char(piece_kind.to_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
