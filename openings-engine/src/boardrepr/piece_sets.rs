//! Piece-Centric representation of a chess board.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::bitboard::Bitboard;
use crate::boardrepr::Mailbox;
use crate::coretypes::{Color, Piece, PieceKind, Square, NUM_PIECE_KINDS};

/// A Piece-Centric representation of pieces on a chessboard.
/// One Bitboard per colored piece encodes the squares it stands on.
/// PieceSets indexes by piece to get squares, as opposed to Mailbox which
/// indexes by square to get a piece.
///
/// Layout: White boards at `0..6`, Black boards at `6..12`, each ordered by PieceKind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PieceSets {
    pieces: [Bitboard; Self::SIZE],
}

impl PieceSets {
    const SIZE: usize = 2 * NUM_PIECE_KINDS;

    #[inline(always)]
    const fn offset(color: Color, piece_kind: PieceKind) -> usize {
        color as usize * NUM_PIECE_KINDS + piece_kind as usize
    }

    /// Returns PieceSets with all Bitboards set to empty.
    pub fn new() -> Self {
        PieceSets {
            pieces: [Bitboard::EMPTY; Self::SIZE],
        }
    }

    /// Returns PieceSets arranged in starting chess position.
    pub fn start_position() -> Self {
        Self::from(&Mailbox::start_position())
    }

    /// Set of squares occupied by any piece.
    pub fn occupied(&self) -> Bitboard {
        self.pieces.iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    /// Set of squares occupied by pieces of color.
    pub fn color_occupied(&self, color: Color) -> Bitboard {
        self[color].iter().fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    /// Returns the piece standing on square, if any.
    pub fn on_square(&self, square: Square) -> Option<Piece> {
        for color in Color::ALL {
            for piece_kind in PieceKind::ALL {
                if self[(color, piece_kind)].has_square(square) {
                    return Some(Piece::new(color, piece_kind));
                }
            }
        }
        None
    }

    /// Removes whichever piece stands on square and returns it.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.on_square(square)?;
        self[&piece].clear_square(square);
        Some(piece)
    }

    /// Returns pretty-printed chess board representation of Self.
    pub fn pretty(&self) -> String {
        Mailbox::from(self).pretty()
    }
}

impl Index<&Piece> for PieceSets {
    type Output = Bitboard;
    fn index(&self, piece: &Piece) -> &Self::Output {
        &self.pieces[Self::offset(piece.color, piece.piece_kind)]
    }
}

impl IndexMut<&Piece> for PieceSets {
    fn index_mut(&mut self, piece: &Piece) -> &mut Self::Output {
        &mut self.pieces[Self::offset(piece.color, piece.piece_kind)]
    }
}

impl Index<(Color, PieceKind)> for PieceSets {
    type Output = Bitboard;
    fn index(&self, (color, piece_kind): (Color, PieceKind)) -> &Self::Output {
        &self.pieces[Self::offset(color, piece_kind)]
    }
}

impl IndexMut<(Color, PieceKind)> for PieceSets {
    fn index_mut(&mut self, (color, piece_kind): (Color, PieceKind)) -> &mut Self::Output {
        &mut self.pieces[Self::offset(color, piece_kind)]
    }
}

/// Get a slice of all piece boards of one color.
/// ```rust
/// # use openings_engine::{coretypes::Color, boardrepr::PieceSets};
/// let ps = PieceSets::start_position();
/// assert_eq!(ps[Color::White].len(), 6);
/// assert_eq!(ps[Color::Black].len(), 6);
/// ```
impl Index<Color> for PieceSets {
    type Output = [Bitboard];
    fn index(&self, color: Color) -> &Self::Output {
        let start = color as usize * NUM_PIECE_KINDS;
        &self.pieces[start..start + NUM_PIECE_KINDS]
    }
}

impl From<&Mailbox> for PieceSets {
    fn from(mb: &Mailbox) -> Self {
        let mut pieces = Self::new();
        for square in Square::iter() {
            if let Some(ref piece) = mb[square] {
                pieces[piece].set_square(square);
            }
        }
        pieces
    }
}

/// Defaults to standard chess piece starting positions.
impl Default for PieceSets {
    fn default() -> Self {
        Self::start_position()
    }
}

impl Display for PieceSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
