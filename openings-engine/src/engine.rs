//! Position-at-ply queries over a move sequence.
//!
//! A query replays a move sequence from the initial position up to a ply and
//! reports the FEN reached. Move tokens the rules cannot resolve, even after
//! every [`Fallback`](crate::notation::Fallback), end the replay early. The
//! position reached so far is the answer and no error is raised.
//!
//! Ply indices outside of `[-1, N-1]` are a caller error and fail fast.

use log::{debug, warn};

use crate::error::{self, ErrorKind};
use crate::fen::START_FEN;
use crate::movetext::MoveSequence;
use crate::notation::{self, Fallback};
use crate::rules::{Rules, StandardRules};

/// Signed ply index. `-1` is the initial position, `i >= 0` is the position after move `i`.
pub type PlyIndex = i32;

/// Ply index of the initial position.
pub const START_PLY: PlyIndex = -1;

/// Ply index of the position reached after count moves.
pub fn ply_after(count: usize) -> PlyIndex {
    PlyIndex::try_from(count).map_or(PlyIndex::MAX, |count| count + START_PLY)
}

/// Checks ply against a sequence of len moves and returns how many moves
/// must be played to reach it.
pub fn plies_to_play(len: usize, ply: PlyIndex) -> error::Result<usize> {
    let count = usize::try_from(i64::from(ply) + 1).ok().filter(|count| *count <= len);
    count.ok_or_else(|| (ErrorKind::PlyOutOfRange, format!("ply {ply} for {len} moves")).into())
}

/// Outcome of replaying a move sequence.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Replay {
    /// FEN of the last position reached.
    pub fen: String,
    /// Number of moves applied.
    pub applied: usize,
    /// Index of the token that could not be resolved, if the replay stopped early.
    pub halted_at: Option<usize>,
}

impl Replay {
    /// Returns true if every requested move was applied.
    pub fn is_complete(&self) -> bool {
        self.halted_at.is_none()
    }
}

/// Answers position queries for move sequences, using injected rules.
/// The engine holds no replay state, so one instance may serve any number of
/// callers and threads.
#[derive(Debug, Clone, Default)]
pub struct PositionEngine<R: Rules = StandardRules> {
    rules: R,
}

impl PositionEngine<StandardRules> {
    /// Engine playing standard chess.
    pub const fn standard() -> Self {
        Self {
            rules: StandardRules,
        }
    }
}

impl<R: Rules> PositionEngine<R> {
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// FEN of the position at ply.
    ///
    /// * `-1` gives [`START_FEN`], for any sequence including an empty one.
    /// * `N-1` gives `final_fen` verbatim, without replaying.
    /// * Any other ply replays moves `0..=ply` on a fresh board.
    ///
    /// # Errors
    /// `ErrorKind::PlyOutOfRange` if ply is outside of `[-1, N-1]`.
    pub fn position_at_ply(
        &self,
        moves: &MoveSequence,
        ply: PlyIndex,
        final_fen: &str,
    ) -> error::Result<String> {
        let count = plies_to_play(moves.len(), ply)?;
        if ply == START_PLY {
            Ok(START_FEN.to_string())
        } else if count == moves.len() {
            Ok(final_fen.to_string())
        } else {
            Ok(self.replay_count(moves, count).fen)
        }
    }

    /// Replays moves `0..=through` and reports how far the replay got.
    /// Never substitutes a trusted final FEN.
    ///
    /// # Errors
    /// `ErrorKind::PlyOutOfRange` if through is outside of `[-1, N-1]`.
    pub fn replay(&self, moves: &MoveSequence, through: PlyIndex) -> error::Result<Replay> {
        let count = plies_to_play(moves.len(), through)?;
        Ok(self.replay_count(moves, count))
    }

    /// Replays the whole sequence. For move text without a trusted final FEN.
    pub fn final_position(&self, moves: &MoveSequence) -> Replay {
        self.replay_count(moves, moves.len())
    }

    fn replay_count(&self, moves: &MoveSequence, count: usize) -> Replay {
        let mut board = self.rules.start();
        let mut halted_at = None;
        for (index, token) in moves.iter().take(count).enumerate() {
            if !self.advance(&mut board, index, token) {
                halted_at = Some(index);
                break;
            }
        }
        Replay {
            fen: self.rules.fen(&board),
            applied: halted_at.unwrap_or(count),
            halted_at,
        }
    }

    /// Applies token to board through the ordered fallbacks.
    /// Returns false, with board unchanged, if no candidate was accepted.
    pub(crate) fn advance(&self, board: &mut R::Board, index: usize, token: &str) -> bool {
        match notation::first_success(token, |candidate| self.rules.apply(board, candidate)) {
            Some((Fallback::Exact, ())) => true,
            Some((fallback, ())) => {
                debug!("move {index} `{token}` resolved by {fallback} fallback");
                true
            }
            None => {
                let reached = ply_after(index);
                warn!("move {index} `{token}` could not be resolved, replay stops at ply {reached}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ply_bounds() {
        assert_eq!(plies_to_play(0, -1).unwrap(), 0);
        assert_eq!(plies_to_play(3, -1).unwrap(), 0);
        assert_eq!(plies_to_play(3, 0).unwrap(), 1);
        assert_eq!(plies_to_play(3, 2).unwrap(), 3);
        for (len, ply) in [(3, 3), (3, -2), (0, 0), (1, PlyIndex::MIN), (1, PlyIndex::MAX)] {
            let err = plies_to_play(len, ply).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::PlyOutOfRange);
        }
    }

    #[test]
    fn ply_after_moves() {
        assert_eq!(ply_after(0), START_PLY);
        assert_eq!(ply_after(3), 2);
        assert_eq!(ply_after(usize::MAX), PlyIndex::MAX);
    }

    #[test]
    fn start_and_final_plies_skip_replay() {
        let engine = PositionEngine::standard();
        let moves = MoveSequence::parse("1. e4 e5 2. Nf3");
        assert_eq!(engine.position_at_ply(&moves, -1, "final").unwrap(), START_FEN);
        assert_eq!(engine.position_at_ply(&moves, 2, "final").unwrap(), "final");
        assert_eq!(
            engine.position_at_ply(&MoveSequence::default(), -1, "final").unwrap(),
            START_FEN
        );
    }

    #[test]
    fn replay_stops_at_unresolved_token() {
        let engine = PositionEngine::standard();
        let moves = MoveSequence::parse("e4 e5 Bz9 Nc6");
        let replay = engine.replay(&moves, 3).unwrap();
        assert_eq!(replay.applied, 2);
        assert_eq!(replay.halted_at, Some(2));
        assert!(!replay.is_complete());

        let before = engine.replay(&moves, 1).unwrap();
        assert!(before.is_complete());
        assert_eq!(before.fen, replay.fen);
    }

    #[test]
    fn replay_uses_fallbacks() {
        let engine = PositionEngine::standard();
        let moves = MoveSequence::parse("E4 e5 o-o");
        let replay = engine.final_position(&moves);
        assert_eq!(replay.applied, 2);
        assert_eq!(replay.halted_at, Some(2));
    }
}
