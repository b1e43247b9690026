//! Holds Position struct, the board state every replay advances.
//! Position represents a chess position.

use std::fmt::{self, Display};

use crate::bitboard::Bitboard;
use crate::boardrepr::PieceSets;
use crate::coretypes::{Castling, Color, Move, MoveCount, MoveInfo, MoveKind, Piece, PieceKind, Square};
use crate::coretypes::{Color::*, PieceKind::*, Square::*};
use crate::fen::Fen;
use crate::movegen as mg;
use crate::movelist::MoveList;

/// struct Position
/// A complete data set that can represent any chess position.
/// # Members:
/// * pieces - a piece-centric setwise container of all basic chess piece positions.
/// * side_to_move - Color of player whose turn it is.
/// * castling - Castling rights for both players.
/// * en_passant - Square behind a pawn that just double pushed, if any.
/// * halfmoves - Tracker for 50 move draw rule. Resets after capture/pawn move.
/// * fullmoves - Starts at 1, increments after each black player's move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    pub(crate) pieces: PieceSets,
    pub(crate) side_to_move: Color,
    pub(crate) castling: Castling,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmoves: MoveCount,
    pub(crate) fullmoves: MoveCount,
}

impl Position {
    /// Standard chess start position.
    pub fn start_position() -> Self {
        Self {
            pieces: PieceSets::start_position(),
            side_to_move: Color::White,
            castling: Castling::start_position(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// Const getters.
    pub fn pieces(&self) -> &PieceSets {
        &self.pieces
    }
    pub fn side_to_move(&self) -> &Color {
        &self.side_to_move
    }
    pub fn castling(&self) -> &Castling {
        &self.castling
    }
    pub fn en_passant(&self) -> &Option<Square> {
        &self.en_passant
    }
    pub fn halfmoves(&self) -> &MoveCount {
        &self.halfmoves
    }
    pub fn fullmoves(&self) -> &MoveCount {
        &self.fullmoves
    }

    /// Returns the piece on square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces.on_square(square)
    }

    /// Squares attacked by every piece of color.
    pub fn attacks(&self, color: Color) -> Bitboard {
        let occupied = self.pieces.occupied();
        let queens = self.pieces[(color, Queen)];
        let rooks = self.pieces[(color, Rook)] | queens;
        let bishops = self.pieces[(color, Bishop)] | queens;

        mg::pawn_attacks(self.pieces[(color, Pawn)], color)
            | mg::knight_attacks(self.pieces[(color, Knight)])
            | mg::king_attacks(self.pieces[(color, King)])
            | mg::slide_attacks(rooks, bishops, occupied)
    }

    /// Returns true if the king of color is attacked by the other player.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.attacks(!color).has_any(self.pieces[(color, King)])
    }

    /// Returns true if the player to move is in check.
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// Moves that obey piece movement and occupancy, without regard to check.
    /// Castling moves are already fully legal.
    pub fn get_pseudo_legal_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let us = self.pieces.color_occupied(color);
        let them = self.pieces.color_occupied(!color);
        let occupied = us | them;
        let mut moves = MoveList::new();

        let pawns = self.pieces[(color, Pawn)];
        mg::pawn_pseudo_moves(&mut moves, pawns, color, occupied, them, self.en_passant);
        mg::knight_pseudo_moves(&mut moves, self.pieces[(color, Knight)], us);
        mg::bishop_pseudo_moves(&mut moves, self.pieces[(color, Bishop)], occupied, us);
        mg::rook_pseudo_moves(&mut moves, self.pieces[(color, Rook)], occupied, us);
        mg::queen_pseudo_moves(&mut moves, self.pieces[(color, Queen)], occupied, us);
        mg::king_pseudo_moves(&mut moves, self.pieces[(color, King)], us);
        mg::legal_castling_moves(&mut moves, color, self.castling, occupied, self.attacks(!color));

        moves
    }

    /// All legal moves of the player to move.
    /// A pseudo-legal move is kept if it does not leave the mover's king attacked.
    pub fn get_legal_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = self.get_pseudo_legal_moves();
        moves.retain(|move_| {
            let mut next = *self;
            next.do_move(*move_).is_some() && !next.is_king_attacked(color)
        });
        moves
    }

    /// Returns true if move is legal in this position.
    pub fn is_legal_move(&self, move_: Move) -> bool {
        self.get_legal_moves().contains(&move_)
    }

    /// Applies move if it is legal, otherwise leaves self untouched and returns None.
    pub fn do_legal_move(&mut self, move_: Move) -> Option<MoveInfo> {
        if self.is_legal_move(move_) {
            self.do_move(move_)
        } else {
            None
        }
    }

    /// Describes how move would play out in this position, without applying it.
    /// Returns None if the player to move has no piece on the origin square.
    pub fn move_info(&self, move_: Move) -> Option<MoveInfo> {
        let piece = self.piece_at(move_.from)?;
        if piece.color != self.side_to_move {
            return None;
        }
        let captured = self.piece_at(move_.to);

        let move_kind = match (piece.piece_kind, captured) {
            (_, Some(target)) if target.color == piece.color => return None,
            (_, Some(target)) => MoveKind::Capture(target.piece_kind),
            (King, None) if move_.from.file_u8().abs_diff(move_.to.file_u8()) == 2 => {
                MoveKind::Castle
            }
            (Pawn, None) if Some(move_.to) == self.en_passant => MoveKind::EnPassant,
            _ => MoveKind::Quiet,
        };
        Some(MoveInfo::new(move_, piece.piece_kind, move_kind))
    }

    /// Applies a pseudo-legal move and updates all position state.
    /// The move is not checked for legality, only for a piece of the player
    /// to move on the origin square and no friendly piece on the target.
    pub fn do_move(&mut self, move_: Move) -> Option<MoveInfo> {
        let move_info = self.move_info(move_)?;
        let color = self.side_to_move;
        let moved = Piece::new(color, move_info.piece_kind);

        match move_info.move_kind {
            MoveKind::Capture(_) => {
                self.pieces.take(move_.to);
            }
            MoveKind::EnPassant => {
                let captured_square = match color {
                    White => move_.to.decrement_rank(),
                    Black => move_.to.increment_rank(),
                };
                if let Some(square) = captured_square {
                    self.pieces[(!color, Pawn)].clear_square(square);
                }
            }
            MoveKind::Castle => {
                let (rook_from, rook_to) = match move_.to {
                    G1 => (H1, F1),
                    C1 => (A1, D1),
                    G8 => (H8, F8),
                    _ => (A8, D8),
                };
                let rooks = &mut self.pieces[(color, Rook)];
                rooks.clear_square(rook_from);
                rooks.set_square(rook_to);
            }
            MoveKind::Quiet => (),
        }

        self.pieces[&moved].clear_square(move_.from);
        let landed = match move_.promotion {
            Some(promotion) if moved.piece_kind == Pawn => Piece::new(color, promotion),
            _ => moved,
        };
        self.pieces[&landed].set_square(move_.to);

        if moved.piece_kind == King {
            self.castling.clear_color(color);
        }
        self.castling.clear_rook_square(move_.from);
        self.castling.clear_rook_square(move_.to);

        self.en_passant = None;
        if moved.piece_kind == Pawn && move_.from.rank_u8().abs_diff(move_.to.rank_u8()) == 2 {
            self.en_passant = match color {
                White => move_.from.increment_rank(),
                Black => move_.from.decrement_rank(),
            };
        }

        if move_info.is_pawn_move() || move_info.is_capture() {
            self.halfmoves = 0;
        } else {
            self.halfmoves = self.halfmoves.saturating_add(1);
        }
        if color == Black {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }
        self.side_to_move = !color;

        Some(move_info)
    }

    /// Returns pretty-printed chess board representation of Self.
    pub fn pretty(&self) -> String {
        self.pieces.pretty()
    }

    /// Returns the moving piece kind of a move in this position.
    pub(crate) fn moved_piece_kind(&self, move_: Move) -> Option<PieceKind> {
        self.piece_at(move_.from).map(|piece| piece.piece_kind)
    }
}

/// Defaults to standard chess start position.
impl Default for Position {
    fn default() -> Self {
        Self::start_position()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\nFen: {}\n", self.pretty(), self.to_fen())
    }
}
