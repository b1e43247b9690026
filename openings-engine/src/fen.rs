//! Forsyth-Edwards Notation, a standard notation for describing a chess position.
//! <https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation>
//!
//! Example:
//! Starting Chess FEN = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"

use std::convert::TryFrom;
use std::str::FromStr;

use crate::boardrepr::{Mailbox, PieceSets};
use crate::coretypes::{Castling, Color, MoveCount, Piece, Rank, Square, NUM_FILES, NUM_RANKS};
use crate::error::{self, ErrorKind};
use crate::position::Position;

/// FEN of the standard chess start position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Allows conversion of a type to and from a FEN string.
pub trait Fen: Sized {
    /// Attempt to parse a Fen string into implementing type.
    fn parse_fen(s: &str) -> error::Result<Self>;

    /// Returns string representation of implementing type in Fen format.
    fn to_fen(&self) -> String;
}

impl Fen for Position {
    /// Parses the 6 space separated fields of a FEN into a Position.
    /// The position is checked for shape, not for reachability.
    fn parse_fen(s: &str) -> error::Result<Self> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err((ErrorKind::FenFieldCount, fields.len()).into());
        }

        let pieces = parse_placement(fields[0])?;
        let mut side = fields[1].chars();
        let side_to_move = match (side.next(), side.next()) {
            (Some(ch), None) => {
                Color::try_from(ch).map_err(|err| error::Error::new(ErrorKind::FenState, err))?
            }
            _ => return Err((ErrorKind::FenState, fields[1]).into()),
        };
        let castling = Castling::from_str(fields[2])
            .map_err(|err| error::Error::new(ErrorKind::FenState, err))?;
        let en_passant = parse_en_passant(fields[3])?;
        let halfmoves = parse_counter(fields[4])?;
        let fullmoves = parse_counter(fields[5])?;

        Ok(Position {
            pieces,
            side_to_move,
            castling,
            en_passant,
            halfmoves,
            fullmoves,
        })
    }

    fn to_fen(&self) -> String {
        let mailbox = Mailbox::from(&self.pieces);
        let mut fen = String::with_capacity(90);

        for rank in (0..NUM_RANKS).rev() {
            let mut empty = 0u8;
            for file in 0..NUM_FILES {
                match mailbox[rank * NUM_FILES + file] {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        fen.push(char::from(piece));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push((b'0' + empty) as char);
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        let en_passant = match self.en_passant {
            Some(square) => square.to_string(),
            None => "-".to_string(),
        };
        fen.push_str(&format!(
            " {} {} {} {} {}",
            self.side_to_move, self.castling, en_passant, self.halfmoves, self.fullmoves
        ));
        fen
    }
}

impl FromStr for Position {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        Self::parse_fen(s)
    }
}

/// Placement ::= rank '/' rank '/' ... 8 ranks, from rank 8 down to rank 1.
fn parse_placement(placement: &str) -> error::Result<PieceSets> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != NUM_RANKS {
        return Err((ErrorKind::FenPlacement, "expected 8 ranks").into());
    }

    let mut mailbox = Mailbox::new();
    for (row, text) in ranks.into_iter().enumerate() {
        let rank = NUM_RANKS - 1 - row;
        let mut file = 0usize;
        for ch in text.chars() {
            if let Some(skip) = ch.to_digit(10).filter(|n| (1..=8).contains(n)) {
                file += skip as usize;
            } else {
                let piece = Piece::try_from(ch)
                    .map_err(|err| error::Error::new(ErrorKind::FenPlacement, err))?;
                if file >= NUM_FILES {
                    return Err((ErrorKind::FenPlacement, text).into());
                }
                mailbox[rank * NUM_FILES + file] = Some(piece);
                file += 1;
            }
        }
        if file != NUM_FILES {
            return Err((ErrorKind::FenPlacement, text).into());
        }
    }
    Ok(PieceSets::from(&mailbox))
}

/// En passant ::= '-' | square on rank 3 or 6
fn parse_en_passant(s: &str) -> error::Result<Option<Square>> {
    if s == "-" {
        return Ok(None);
    }
    let square =
        Square::from_str(s).map_err(|err| error::Error::new(ErrorKind::FenState, err))?;
    match square.rank() {
        Rank::R3 | Rank::R6 => Ok(Some(square)),
        _ => Err((ErrorKind::FenState, s).into()),
    }
}

fn parse_counter(s: &str) -> error::Result<MoveCount> {
    s.parse::<MoveCount>()
        .map_err(|err| error::Error::new(ErrorKind::FenCounters, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Move;
    use crate::coretypes::Square::*;

    #[test]
    fn start_position_round_trip() {
        let pos = Position::parse_fen(START_FEN).unwrap();
        assert_eq!(pos, Position::start_position());
        assert_eq!(Position::start_position().to_fen(), START_FEN);
    }

    #[test]
    fn fen_after_moves() {
        let mut pos = Position::start_position();
        pos.do_legal_move(Move::new(E2, E4, None)).unwrap();
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        pos.do_legal_move(Move::new(C7, C5, None)).unwrap();
        pos.do_legal_move(Move::new(G1, F3, None)).unwrap();
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn parse_kiwipete() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let pos: Position = fen.parse().unwrap();
        assert_eq!(pos.to_fen(), fen);
        assert_eq!(pos.get_legal_moves().len(), 48);
    }

    #[test]
    fn malformed_fens() {
        let cases = [
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -", ErrorKind::FenFieldCount),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1", ErrorKind::FenPlacement),
            ("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", ErrorKind::FenPlacement),
            ("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", ErrorKind::FenPlacement),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1", ErrorKind::FenPlacement),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1", ErrorKind::FenState),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1", ErrorKind::FenState),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1", ErrorKind::FenState),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - a 1", ErrorKind::FenCounters),
        ];
        for (fen, kind) in cases {
            let err = Position::parse_fen(fen).unwrap_err();
            assert_eq!(err.kind(), kind, "{fen}");
        }
    }
}
