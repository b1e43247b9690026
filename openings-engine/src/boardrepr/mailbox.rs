//! A [mailbox](https://www.chessprogramming.org/Mailbox) is a square-centric
//! representation of a chess board.
//!
//! FEN piece placement is read into a Mailbox first, and the terminal board
//! drawing is rendered from one.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::boardrepr::PieceSets;
use crate::coretypes::{
    Color, Piece, PieceKind, Square, SquareIndexable, NUM_FILES, NUM_RANKS, NUM_SQUARES,
};

/// Classic 8x8 board, indexed by square starting at A1 = 0, H8 = 63.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mailbox {
    board: [Option<Piece>; NUM_SQUARES],
}

impl Mailbox {
    /// Creates an empty Mailbox, where all squares are None.
    pub fn new() -> Self {
        Mailbox {
            board: [None; NUM_SQUARES],
        }
    }

    /// Create Mailbox with pieces arranged in starting chess position.
    pub fn start_position() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; NUM_FILES] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut mb = Self::new();
        for (file, piece_kind) in BACK_RANK.into_iter().enumerate() {
            mb[file] = Some(Piece::new(Color::White, piece_kind));
            mb[NUM_FILES + file] = Some(Piece::new(Color::White, Pawn));
            mb[6 * NUM_FILES + file] = Some(Piece::new(Color::Black, Pawn));
            mb[7 * NUM_FILES + file] = Some(Piece::new(Color::Black, piece_kind));
        }
        mb
    }

    pub fn board(&self) -> &[Option<Piece>; NUM_SQUARES] {
        &self.board
    }

    /// Returns pretty-printed chess board with borders and file/rank indicators.
    pub fn pretty(&self) -> String {
        const RANK_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(RANK_SEP);
        for rank in (0..NUM_RANKS).rev() {
            pretty.push_str("| ");
            for file in 0..NUM_FILES {
                pretty.push(match self[rank * NUM_FILES + file] {
                    Some(piece) => char::from(piece),
                    None => ' ',
                });
                pretty.push_str(" | ");
            }
            pretty.push_str(&(rank + 1).to_string());
            pretty.push('\n');
            pretty.push_str(RANK_SEP);
        }
        pretty.push_str("  a   b   c   d   e   f   g   h\n");

        pretty
    }
}

/// Panics if idx is out of bounds.
impl Index<usize> for Mailbox {
    type Output = Option<Piece>;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.board[idx]
    }
}

impl IndexMut<usize> for Mailbox {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.board[idx]
    }
}

impl Index<Square> for Mailbox {
    type Output = Option<Piece>;
    fn index(&self, square: Square) -> &Self::Output {
        &self.board[square.idx()]
    }
}

impl IndexMut<Square> for Mailbox {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.board[square.idx()]
    }
}

impl From<&PieceSets> for Mailbox {
    fn from(pieces: &PieceSets) -> Mailbox {
        let mut mb = Mailbox::new();
        for color in Color::ALL {
            for piece_kind in PieceKind::ALL {
                let piece = Piece::new(color, piece_kind);
                pieces[&piece]
                    .into_iter()
                    .for_each(|square| mb[square] = Some(piece));
            }
        }
        mb
    }
}

/// Default value is that of a standard starting chess position.
impl Default for Mailbox {
    fn default() -> Self {
        Mailbox::start_position()
    }
}

impl Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_layout() {
        let mb = Mailbox::start_position();
        assert_eq!(mb[Square::E1], Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(mb[Square::D8], Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(mb[Square::E4], None);
        assert_eq!(mb.board().iter().flatten().count(), 32);
        assert_eq!(Mailbox::from(&PieceSets::from(&mb)), mb);
    }

    #[test]
    fn pretty_start_position() {
        let pretty = Mailbox::start_position().pretty();
        let lines: Vec<&str> = pretty.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[1], "| r | n | b | q | k | b | n | r | 8");
        assert_eq!(lines[15], "| R | N | B | Q | K | B | N | R | 1");
        assert_eq!(lines[17], "  a   b   c   d   e   f   g   h");
    }
}
