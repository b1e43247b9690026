//! Incremental replay cursor for one move sequence at a time.
//!
//! A UI scrubbing through a line asks for neighbouring plies over and over.
//! [`PositionCache`] keeps the board and every FEN reached so far for the
//! last queried sequence, so stepping forward costs one move and stepping
//! back costs nothing. Querying a different sequence drops the cache.
//!
//! Answers are identical to [`PositionEngine::position_at_ply`].

use log::trace;

use crate::engine::{plies_to_play, PlyIndex, PositionEngine, START_PLY};
use crate::error;
use crate::fen::START_FEN;
use crate::movetext::MoveSequence;
use crate::rules::{Rules, StandardRules};

struct Entry<B> {
    moves: MoveSequence,
    board: B,
    /// `fens[0]` is the initial position, `fens[i + 1]` the position after move i.
    fens: Vec<String>,
    /// Index of the first token that could not be resolved.
    halted_at: Option<usize>,
}

impl<B> Entry<B> {
    fn new<R: Rules<Board = B>>(rules: &R, moves: &MoveSequence) -> Self {
        let board = rules.start();
        let mut fens = Vec::with_capacity(moves.len() + 1);
        fens.push(rules.fen(&board));
        Self {
            moves: moves.clone(),
            board,
            fens,
            halted_at: None,
        }
    }
}

/// Position-at-ply queries backed by a replay cursor.
pub struct PositionCache<R: Rules = StandardRules> {
    engine: PositionEngine<R>,
    entry: Option<Entry<R::Board>>,
}

impl PositionCache<StandardRules> {
    /// Cache playing standard chess.
    pub fn standard() -> Self {
        Self::new(PositionEngine::standard())
    }
}

impl<R: Rules> PositionCache<R> {
    pub fn new(engine: PositionEngine<R>) -> Self {
        Self {
            engine,
            entry: None,
        }
    }

    pub fn engine(&self) -> &PositionEngine<R> {
        &self.engine
    }

    /// Returns true if moves is the sequence currently cached.
    pub fn is_cached(&self, moves: &MoveSequence) -> bool {
        matches!(&self.entry, Some(entry) if entry.moves == *moves)
    }

    /// Drops the cached sequence.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// FEN of the position at ply, with the same results as
    /// [`PositionEngine::position_at_ply`].
    ///
    /// # Errors
    /// `ErrorKind::PlyOutOfRange` if ply is outside of `[-1, N-1]`.
    pub fn position_at_ply(
        &mut self,
        moves: &MoveSequence,
        ply: PlyIndex,
        final_fen: &str,
    ) -> error::Result<String> {
        let count = plies_to_play(moves.len(), ply)?;
        if ply == START_PLY {
            return Ok(START_FEN.to_string());
        }
        if count == moves.len() {
            return Ok(final_fen.to_string());
        }

        if self.entry.is_some() && !self.is_cached(moves) {
            trace!("replay cache invalidated for a new sequence of {} moves", moves.len());
            self.entry = None;
        }
        let engine = &self.engine;
        let entry = self
            .entry
            .get_or_insert_with(|| Entry::new(engine.rules(), moves));

        while entry.fens.len() <= count && entry.halted_at.is_none() {
            let index = entry.fens.len() - 1;
            if engine.advance(&mut entry.board, index, &entry.moves[index]) {
                entry.fens.push(engine.rules().fen(&entry.board));
                trace!("replay cache advanced to ply {index}");
            } else {
                entry.halted_at = Some(index);
            }
        }

        let reached = count.min(entry.fens.len() - 1);
        Ok(entry.fens[reached].clone())
    }
}

impl<R: Rules + Default> Default for PositionCache<R> {
    fn default() -> Self {
        Self::new(PositionEngine::default())
    }
}
