//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! Counts the leaf nodes of the legal move tree to a fixed depth. Comparing
//! against published counts verifies move generation and move application.

use std::ops::{Add, AddAssign};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::coretypes::PlyKind;
use crate::movelist::MoveList;
use crate::position::Position;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

/// Count the number of paths from position to the given depth.
/// Root moves are shared between `threads` workers when the tree is deep enough.
pub fn perft(position: Position, ply: PlyKind, threads: usize) -> PerftInfo {
    if ply == 0 {
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        return perft_recurse(&position, ply);
    }

    let legal_moves = Arc::new(Mutex::new(position.get_legal_moves()));
    let total_perft_info = Arc::new(Mutex::new(PerftInfo::default()));

    // Scoped threads are joined before the scope returns.
    thread::scope(|scope| {
        for _ in 0..threads {
            let legal_moves = Arc::clone(&legal_moves);
            let total_perft_info = Arc::clone(&total_perft_info);
            scope.spawn(move || perft_executor(position, ply, legal_moves, total_perft_info));
        }
    });

    let total = *total_perft_info.lock().unwrap_or_else(PoisonError::into_inner);
    total
}

/// Steals one root move at a time from moves and counts its subtree.
/// When there are no moves left, adds its count to the total and returns.
/// params:
/// position - position the moves are legal in.
/// ply - depth of the search from position. Must be greater than 1.
/// moves - shared list of root moves to steal from.
/// total_perft_info - shared sum of all workers.
fn perft_executor(
    position: Position,
    ply: PlyKind,
    moves: Arc<Mutex<MoveList>>,
    total_perft_info: Arc<Mutex<PerftInfo>>,
) {
    debug_assert!(ply > 1);
    let steal = || moves.lock().unwrap_or_else(PoisonError::into_inner).pop();
    let mut perft_info = PerftInfo::default();

    while let Some(move_) = steal() {
        let mut child = position;
        child.do_move(move_);
        perft_info += perft_recurse(&child, ply - 1);
    }

    *total_perft_info
        .lock()
        .unwrap_or_else(PoisonError::into_inner) += perft_info;
}

/// Ply must be non-zero.
fn perft_recurse(position: &Position, ply: PlyKind) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let legal_moves = position.get_legal_moves();
    if ply == 1 {
        return PerftInfo::new(legal_moves.len() as u64);
    }

    let mut perft_info = PerftInfo::default();
    for legal_move in legal_moves {
        let mut child = *position;
        child.do_move(legal_move);
        perft_info += perft_recurse(&child, ply - 1);
    }
    perft_info
}
