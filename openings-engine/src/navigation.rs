//! Ply navigation for stepping through an opening line.

use crate::cache::PositionCache;
use crate::engine::{PlyIndex, START_PLY};
use crate::error;
use crate::movetext::MoveSequence;
use crate::opening::Opening;
use crate::rules::{Rules, StandardRules};

/// Current ply within `[-1, N-1]` of a line of N moves.
/// Moves past either end are ignored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlyCursor {
    len: usize,
    ply: PlyIndex,
}

impl PlyCursor {
    /// Cursor over len moves, placed on the last ply.
    pub fn new(len: usize) -> Self {
        let mut cursor = Self {
            len,
            ply: START_PLY,
        };
        cursor.go_to_end();
        cursor
    }

    pub fn ply(&self) -> PlyIndex {
        self.ply
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last_ply(&self) -> PlyIndex {
        PlyIndex::try_from(self.len).map_or(PlyIndex::MAX, |len| len + START_PLY)
    }

    pub fn is_at_start(&self) -> bool {
        self.ply == START_PLY
    }

    pub fn is_at_end(&self) -> bool {
        self.ply == self.last_ply()
    }

    pub fn can_step_back(&self) -> bool {
        !self.is_at_start()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.is_at_end()
    }

    pub fn go_to_start(&mut self) {
        self.ply = START_PLY;
    }

    pub fn go_to_end(&mut self) {
        self.ply = self.last_ply();
    }

    /// Returns true if the cursor moved.
    pub fn step_back(&mut self) -> bool {
        let moved = self.can_step_back();
        if moved {
            self.ply -= 1;
        }
        moved
    }

    /// Returns true if the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        let moved = self.can_step_forward();
        if moved {
            self.ply += 1;
        }
        moved
    }

    /// Describes the current ply: `Starting position`, `Final position`,
    /// `3. Bb5` after a White move or `2... Nc6` after a Black move.
    pub fn label(&self, moves: &MoveSequence) -> String {
        if self.is_at_start() {
            return "Starting position".to_string();
        }
        if self.is_at_end() {
            return "Final position".to_string();
        }
        let index = self.ply as usize;
        let number = index / 2 + 1;
        let dots = if index % 2 == 0 { "." } else { "..." };
        format!("{number}{dots} {}", moves.get(index).unwrap_or_default())
    }
}

/// One opening opened for browsing: its moves, a cursor and a replay cache.
pub struct Viewer<R: Rules = StandardRules> {
    opening: Opening,
    moves: MoveSequence,
    cursor: PlyCursor,
    cache: PositionCache<R>,
}

impl Viewer<StandardRules> {
    pub fn standard(opening: Opening) -> Self {
        Self::new(opening, PositionCache::standard())
    }
}

impl<R: Rules> Viewer<R> {
    /// Opens opening at its final position.
    pub fn new(opening: Opening, cache: PositionCache<R>) -> Self {
        let moves = opening.moves();
        let cursor = PlyCursor::new(moves.len());
        Self {
            opening,
            moves,
            cursor,
            cache,
        }
    }

    pub fn opening(&self) -> &Opening {
        &self.opening
    }

    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    pub fn cursor(&self) -> &PlyCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut PlyCursor {
        &mut self.cursor
    }

    pub fn label(&self) -> String {
        self.cursor.label(&self.moves)
    }

    /// FEN of the position at the cursor.
    pub fn fen(&mut self) -> error::Result<String> {
        self.cache
            .position_at_ply(&self.moves, self.cursor.ply(), &self.opening.fen)
    }

    /// Replaces the opening, keeping the cache, and moves the cursor to its end.
    pub fn open(&mut self, opening: Opening) {
        self.moves = opening.moves();
        self.cursor = PlyCursor::new(self.moves.len());
        self.opening = opening;
    }
}
