//! Standard Algebraic Notation.
//! <https://en.wikipedia.org/wiki/Algebraic_notation_(chess)>
//!
//! A SAN token names a piece and a target square and leaves the origin square
//! implicit, so it only becomes a [`Move`] in the context of a [`Position`].
//!
//! The reader is tolerant in the ways published opening lines tend to need:
//! * trailing annotation glyphs `!`, `?`, `!!`, `?!`, ...
//! * one trailing check `+` or mate `#` marker, and an `e.p.` suffix
//! * castling written with letter O or digit 0
//! * promotion written as `e8=Q` or `e8Q`
//! * `-` separators of long algebraic, `Ng1-f3`, `e2-e4`
//!
//! The capture marker `x` is accepted anywhere before the target square and is
//! not checked against the board.

use std::convert::TryFrom;
use std::str::FromStr;

use crate::coretypes::{File, Move, PieceKind, Rank, Square};
use crate::error::{self, ErrorKind};
use crate::position::Position;

/// A parsed SAN token, not yet bound to a position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum San {
    Castle {
        kingside: bool,
    },
    Normal {
        piece_kind: PieceKind,
        from_file: Option<File>,
        from_rank: Option<Rank>,
        to: Square,
        promotion: Option<PieceKind>,
    },
}

impl San {
    /// Finds the single legal move of position this SAN describes.
    pub fn resolve(&self, position: &Position) -> error::Result<Move> {
        let mut matches = position
            .get_legal_moves()
            .into_iter()
            .filter(|move_| self.matches(position, *move_));

        let resolved = matches.next().ok_or(ErrorKind::SanIllegal)?;
        match matches.next() {
            None => Ok(resolved),
            Some(_) => Err((ErrorKind::SanAmbiguous, resolved).into()),
        }
    }

    fn matches(&self, position: &Position, move_: Move) -> bool {
        let moved = match position.moved_piece_kind(move_) {
            Some(moved) => moved,
            None => return false,
        };
        match *self {
            San::Castle { kingside } => {
                let to_file = if kingside { File::G } else { File::C };
                moved == PieceKind::King
                    && move_.from.file() == File::E
                    && move_.to.file() == to_file
                    && move_.from.rank() == move_.to.rank()
            }
            San::Normal {
                piece_kind,
                from_file,
                from_rank,
                to,
                promotion,
            } => {
                moved == piece_kind
                    && move_.to == to
                    && move_.promotion == promotion
                    && from_file.map_or(true, |file| move_.from.file() == file)
                    && from_rank.map_or(true, |rank| move_.from.rank() == rank)
            }
        }
    }
}

/// Strips glyphs that never change which move is meant.
fn strip_suffixes(mut s: &str) -> &str {
    s = s.trim_end_matches(|ch| ch == '!' || ch == '?');
    s = s.strip_suffix("e.p.").unwrap_or(s);
    s = s
        .strip_suffix('+')
        .or_else(|| s.strip_suffix('#'))
        .unwrap_or(s);
    s
}

impl FromStr for San {
    type Err = error::Error;
    fn from_str(token: &str) -> error::Result<Self> {
        let malformed = || error::Error::from((ErrorKind::SanMalformed, token));
        let file = |ch: &char| File::try_from(*ch).map_err(|_| malformed());
        let rank = |ch: &char| Rank::try_from(*ch).map_err(|_| malformed());
        let s = strip_suffixes(token);

        match s {
            "O-O" | "0-0" => return Ok(San::Castle { kingside: true }),
            "O-O-O" | "0-0-0" => return Ok(San::Castle { kingside: false }),
            _ => (),
        }
        if !s.is_ascii() {
            return Err(malformed());
        }

        // Piece letter, then disambiguation and separators, then the target
        // square, then an optional promotion.
        let chars: Vec<char> = s.chars().filter(|ch| *ch != 'x' && *ch != '-').collect();
        let leading_piece = chars.first().and_then(|ch| PieceKind::from_san_char(*ch));
        let (piece_kind, mut rest) = match leading_piece {
            Some(piece_kind) => (piece_kind, &chars[1..]),
            None => (PieceKind::Pawn, &chars[..]),
        };

        let mut promotion = None;
        if let [head @ .., last] = rest {
            let marked = head.last() == Some(&'=');
            if marked || (last.is_ascii_alphabetic() && !('a'..='h').contains(last)) {
                let promoted = PieceKind::from_san_char(last.to_ascii_uppercase())
                    .filter(PieceKind::is_promotable)
                    .ok_or_else(malformed)?;
                promotion = Some(promoted);
                rest = head.strip_suffix(&['=']).unwrap_or(head);
            }
        }
        if promotion.is_some() && piece_kind != PieceKind::Pawn {
            return Err(malformed());
        }

        let (origin, to) = match rest {
            [origin @ .., to_file, to_rank] => {
                (origin, Square::from((file(to_file)?, rank(to_rank)?)))
            }
            _ => return Err(malformed()),
        };

        let (from_file, from_rank) = match origin {
            [] => (None, None),
            [ch] if ch.is_ascii_digit() => (None, Some(rank(ch)?)),
            [ch] => (Some(file(ch)?), None),
            [from_file, from_rank] => (Some(file(from_file)?), Some(rank(from_rank)?)),
            _ => return Err(malformed()),
        };

        Ok(San::Normal {
            piece_kind,
            from_file,
            from_rank,
            to,
            promotion,
        })
    }
}

/// Resolves a move token in position, as SAN first and as coordinate notation second.
pub fn resolve_move(position: &Position, token: &str) -> error::Result<Move> {
    let san_error = match token.parse::<San>().and_then(|san| san.resolve(position)) {
        Ok(move_) => return Ok(move_),
        Err(err) => err,
    };
    match token.parse::<Move>() {
        Ok(move_) if position.is_legal_move(move_) => Ok(move_),
        _ => Err(san_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Square::*;
    use crate::fen::Fen;
    use PieceKind::*;

    fn normal(piece_kind: PieceKind, to: Square) -> San {
        San::Normal {
            piece_kind,
            from_file: None,
            from_rank: None,
            to,
            promotion: None,
        }
    }

    #[test]
    fn parse_simple_tokens() {
        assert_eq!("e4".parse::<San>().unwrap(), normal(Pawn, E4));
        assert_eq!("Nf3".parse::<San>().unwrap(), normal(Knight, F3));
        assert_eq!("Qxe7+".parse::<San>().unwrap(), normal(Queen, E7));
        assert_eq!("Bb5!?".parse::<San>().unwrap(), normal(Bishop, B5));
        assert_eq!("Kd2#".parse::<San>().unwrap(), normal(King, D2));
        assert_eq!("O-O".parse::<San>().unwrap(), San::Castle { kingside: true });
        assert_eq!("0-0-0+".parse::<San>().unwrap(), San::Castle { kingside: false });
    }

    #[test]
    fn parse_disambiguation_and_promotion() {
        let exd5 = "exd5".parse::<San>().unwrap();
        assert!(matches!(
            exd5,
            San::Normal { piece_kind: Pawn, from_file: Some(File::E), to: D5, .. }
        ));

        let r1e1 = "R1e1".parse::<San>().unwrap();
        assert!(matches!(r1e1, San::Normal { from_rank: Some(Rank::R1), from_file: None, .. }));

        let long = "Ng1-f3".parse::<San>().unwrap();
        assert!(matches!(
            long,
            San::Normal { from_file: Some(File::G), from_rank: Some(Rank::R1), to: F3, .. }
        ));

        for text in ["e8=Q", "e8Q", "e8=q+"] {
            let san = text.parse::<San>().unwrap();
            assert!(matches!(san, San::Normal { promotion: Some(Queen), to: E8, .. }), "{text}");
        }
        for text in ["b8=B", "b8=b", "bxa8=b#"] {
            let san = text.parse::<San>().unwrap();
            assert!(matches!(san, San::Normal { promotion: Some(Bishop), .. }), "{text}");
        }
    }

    #[test]
    fn parse_malformed_tokens() {
        for text in ["", "Z4", "Nf", "e9", "Ne8=Q", "e8=K", "abcde4", "O-O-O-O", "nf3"] {
            assert!(text.parse::<San>().is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn resolve_in_position() {
        let pos = Position::start_position();
        assert_eq!(resolve_move(&pos, "Nf3").unwrap(), Move::new(G1, F3, None));
        assert_eq!(resolve_move(&pos, "e4").unwrap(), Move::new(E2, E4, None));
        assert_eq!(resolve_move(&pos, "e2e4").unwrap(), Move::new(E2, E4, None));
        assert_eq!(resolve_move(&pos, "e5").unwrap_err().kind(), ErrorKind::SanIllegal);
        assert_eq!(resolve_move(&pos, "Nd2").unwrap_err().kind(), ErrorKind::SanIllegal);
    }

    #[test]
    fn resolve_ambiguous_knights() {
        // Knights on b1 and f3 both reach d2.
        let fen = "rnbqkbnr/ppp2ppp/8/3pp3/3P4/5N2/PPP1PPPP/RNBQKB1R w KQkq - 0 3";
        let pos = Position::parse_fen(fen).unwrap();
        assert_eq!(resolve_move(&pos, "Nd2").unwrap_err().kind(), ErrorKind::SanAmbiguous);
        assert_eq!(resolve_move(&pos, "Nbd2").unwrap(), Move::new(B1, D2, None));
        assert_eq!(resolve_move(&pos, "Nfd2").unwrap(), Move::new(F3, D2, None));
    }
}
