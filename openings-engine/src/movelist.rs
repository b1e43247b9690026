//! MoveList types used by the position engine.
//!
//! A MoveList type alias keeps the backing container swappable.

use arrayvec::ArrayVec;

use crate::coretypes::{Move, MAX_MOVES};

/// MoveList is a container that can hold at most `MAX_MOVES`, enough for the
/// pseudo-legal moves of any chess position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
