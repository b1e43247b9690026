//! Lookup tables for pieces with a fixed move pattern.
//!
//! Each table holds, per square, the squares a piece on that square attacks
//! on an otherwise empty board. Arrays are indexed by Square's discriminant.

use crate::bitboard::Bitboard;
use crate::coretypes::{SquareIndexable, NUM_SQUARES};

pub const KNIGHT_PATTERN: [Bitboard; NUM_SQUARES] = generate_patterns(&KNIGHT_JUMPS);
pub const KING_PATTERN: [Bitboard; NUM_SQUARES] = generate_patterns(&KING_STEPS);

// (file delta, rank delta)
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub fn knight_pattern<I: SquareIndexable>(idx: I) -> Bitboard {
    KNIGHT_PATTERN[idx.idx()]
}

pub fn king_pattern<I: SquareIndexable>(idx: I) -> Bitboard {
    KING_PATTERN[idx.idx()]
}

/// For every square, set each target that stays on the board after applying a delta.
const fn generate_patterns(deltas: &[(i8, i8); 8]) -> [Bitboard; NUM_SQUARES] {
    let mut patterns = [Bitboard::EMPTY; NUM_SQUARES];
    let mut square = 0;
    while square < NUM_SQUARES {
        let file = (square % 8) as i8;
        let rank = (square / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < deltas.len() {
            let (df, dr) = deltas[i];
            let (to_file, to_rank) = (file + df, rank + dr);
            if to_file >= 0 && to_file < 8 && to_rank >= 0 && to_rank < 8 {
                bits |= 1u64 << (to_rank * 8 + to_file);
            }
            i += 1;
        }
        patterns[square] = Bitboard(bits);
        square += 1;
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::bb_from_shifts;
    use crate::coretypes::Square::*;

    #[test]
    fn knight_patterns() {
        assert_eq!(knight_pattern(A1), bb_from_shifts!(B3, C2));
        assert_eq!(
            knight_pattern(D4),
            bb_from_shifts!(C2, E2, B3, F3, B5, F5, C6, E6)
        );
        assert_eq!(knight_pattern(H8), bb_from_shifts!(G6, F7));
    }

    #[test]
    fn king_patterns() {
        assert_eq!(king_pattern(A1), bb_from_shifts!(A2, B1, B2));
        assert_eq!(king_pattern(E4).len(), 8);
        assert_eq!(king_pattern(H5), bb_from_shifts!(G4, G5, G6, H4, H6));
    }
}
