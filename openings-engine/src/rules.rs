//! The rules capability a position engine replays moves with.
//!
//! Engines are generic over [`Rules`] and receive an implementation when they
//! are built. [`StandardRules`] plays standard chess on [`Position`].

use crate::error::{self, ErrorKind};
use crate::fen::Fen;
use crate::position::Position;
use crate::san;

/// Applies move tokens to boards and describes boards as FEN.
pub trait Rules {
    /// Board state a replay advances.
    type Board: Clone;

    /// Board of the standard initial position.
    fn start(&self) -> Self::Board;

    /// Applies the move named by token to board.
    /// On error board must be left unchanged.
    fn apply(&self, board: &mut Self::Board, token: &str) -> error::Result<()>;

    /// FEN of board.
    fn fen(&self, board: &Self::Board) -> String;
}

/// Standard chess rules over the native board model.
/// Tokens are read as SAN, then as coordinate notation.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StandardRules;

impl Rules for StandardRules {
    type Board = Position;

    fn start(&self) -> Position {
        Position::start_position()
    }

    fn apply(&self, board: &mut Position, token: &str) -> error::Result<()> {
        let move_ = san::resolve_move(board, token)?;
        board.do_move(move_).ok_or(ErrorKind::SanIllegal)?;
        Ok(())
    }

    fn fen(&self, board: &Position) -> String {
        board.to_fen()
    }
}

impl<R: Rules + ?Sized> Rules for &R {
    type Board = R::Board;

    fn start(&self) -> Self::Board {
        (**self).start()
    }
    fn apply(&self, board: &mut Self::Board, token: &str) -> error::Result<()> {
        (**self).apply(board, token)
    }
    fn fen(&self, board: &Self::Board) -> String {
        (**self).fen(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::START_FEN;

    #[test]
    fn standard_rules_apply() {
        let rules = StandardRules;
        let mut board = rules.start();
        assert_eq!(rules.fen(&board), START_FEN);

        rules.apply(&mut board, "e4").unwrap();
        rules.apply(&mut board, "c7c5").unwrap();
        assert_eq!(
            rules.fen(&board),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
        );
    }

    #[test]
    fn rejected_token_leaves_board() {
        let rules = StandardRules;
        let mut board = rules.start();
        let err = rules.apply(&mut board, "Ke2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SanIllegal);
        assert_eq!(board, Position::start_position());
    }
}
