//! Set of chessboard squares packed into a 64-bit unsigned integer.
//!
//! Data Order:
//! * Little-Endian Rank-File mapping (LSR)
//! * A1 = least significant bit = 0
//! * H1 = 7, A2 = 8
//! * H8 = most significant bit = 63
//!
//! Compass Rose Bit Shifting:
//! ```text
//! NoWe       North       NoEa
//!      +7     +8      +9
//! West -1      0      +1 East
//!      -9     -8      -7
//! SoWe       South       SoEa
//! ```
//!
//! The board model keeps one Bitboard per colored piece, and move generation
//! uses them for occupancy, attack sets and castling corridors.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use crate::coretypes::{Square, Square::*, SquareIndexable, NUM_FILES, NUM_RANKS, NUM_SQUARES};

/// Alias for inner type of Bitboard. Useful for const evaluation.
pub type BitboardKind = u64;

/// Wrapper around a u64, where each set bit marks its corresponding square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) BitboardKind);

// Bit-or the shifted representation of each square passed.
// `From` is not const, so constants are built with this instead.
// example: bb_from_shifts!(A1, A2) -> Bitboard(0u64 | (1u64 << A1 as u8) | (1u64 << A2 as u8))
macro_rules! bb_from_shifts {
    ($($shiftable:ident),+) => {
        Bitboard(0u64 $( | (1u64 << $shiftable as u8))*)
    };
}
#[cfg(test)]
pub(crate) use bb_from_shifts;

/// Bitboard Constants
impl Bitboard {
    pub const EMPTY: Bitboard = Self(0x0);
    pub const FULL: Bitboard = Self(!0x0);

    pub const RANK_1: Bitboard = Self(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Self(Self::RANK_1.0 << 8);
    pub const RANK_7: Bitboard = Self(Self::RANK_1.0 << 48);
    pub const RANK_8: Bitboard = Self(Self::RANK_1.0 << 56);

    pub const FILE_A: Bitboard = Self(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Self(Self::FILE_A.0 << 7);

    // Squares that must be empty between king and rook to castle.
    pub const KINGSIDE_BETWEEN: Bitboard = bb_from_shifts!(F1, G1, F8, G8);
    pub const QUEENSIDE_BETWEEN: Bitboard = bb_from_shifts!(B1, C1, D1, B8, C8, D8);
    // Squares the king stands on or crosses while castling. None may be attacked.
    pub const KINGSIDE_PASS: Bitboard = bb_from_shifts!(E1, F1, G1, E8, F8, G8);
    pub const QUEENSIDE_PASS: Bitboard = bb_from_shifts!(C1, D1, E1, C8, D8, E8);
}

impl Bitboard {
    /// Returns true if there are no squares in self, false otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set, 0 <= len <= 64.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub fn has_square<I: SquareIndexable>(&self, idx: I) -> bool {
        self.0 & idx.shift() != 0
    }
    #[inline(always)]
    pub fn set_square<I: SquareIndexable>(&mut self, idx: I) {
        self.0 |= idx.shift();
    }
    #[inline(always)]
    pub fn clear_square<I: SquareIndexable>(&mut self, idx: I) {
        self.0 &= !idx.shift();
    }

    /// Clears squares including and above target square.
    #[inline(always)]
    pub fn clear_square_and_above<I: SquareIndexable>(&mut self, idx: I) {
        self.0 &= idx.shift() - 1;
    }

    /// Clears squares including and below target square.
    #[inline(always)]
    pub fn clear_square_and_below<I: SquareIndexable>(&mut self, idx: I) {
        self.0 &= !(idx.shift() ^ (idx.shift() - 1));
    }

    /// Clears the lowest square from self. If there are no squares, does nothing.
    #[inline(always)]
    pub fn clear_lowest_square(&mut self) {
        self.0 &= self.0.wrapping_sub(1);
    }

    /// Returns the lowest square in the set, or None if the set is empty.
    #[inline(always)]
    pub fn get_lowest_square(&self) -> Option<Square> {
        Square::from_u8(self.0.trailing_zeros() as u8)
    }

    /// Returns the highest square in the set, or None if the set is empty.
    #[inline(always)]
    pub fn get_highest_square(&self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Square::from_u8(63 - bits.leading_zeros() as u8),
        }
    }

    /// Returns true if self has any squares that are in other.
    #[inline(always)]
    pub const fn has_any(&self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// D4 -> D5.
    #[inline(always)]
    pub const fn to_north(&self) -> Self {
        Self(self.0 << 8)
    }
    /// D4 -> D3.
    #[inline(always)]
    pub const fn to_south(&self) -> Self {
        Self(self.0 >> 8)
    }
    /// D4 -> E4. Bits that would wrap onto FILE_A are dropped.
    #[inline(always)]
    pub const fn to_east(&self) -> Self {
        Self((self.0 << 1) & !Self::FILE_A.0)
    }
    /// D4 -> C4. Bits that would wrap onto FILE_H are dropped.
    #[inline(always)]
    pub const fn to_west(&self) -> Self {
        Self((self.0 >> 1) & !Self::FILE_H.0)
    }
    /// D4 -> E5.
    #[inline(always)]
    pub const fn to_north_east(&self) -> Self {
        Self((self.0 << 9) & !Self::FILE_A.0)
    }
    /// D4 -> C5.
    #[inline(always)]
    pub const fn to_north_west(&self) -> Self {
        Self((self.0 << 7) & !Self::FILE_H.0)
    }
    /// D4 -> E3.
    #[inline(always)]
    pub const fn to_south_east(&self) -> Self {
        Self((self.0 >> 7) & !Self::FILE_A.0)
    }
    /// D4 -> C3.
    #[inline(always)]
    pub const fn to_south_west(&self) -> Self {
        Self((self.0 >> 9) & !Self::FILE_H.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl BitXor for Bitboard {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl<I: SquareIndexable> From<I> for Bitboard {
    fn from(square_index: I) -> Self {
        Self(square_index.shift())
    }
}

impl<I: SquareIndexable> FromIterator<I> for Bitboard {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut bb = Bitboard::EMPTY;
        iter.into_iter().for_each(|square| bb.set_square(square));
        bb
    }
}

/// Iterator type that yields each square in a bitboard, lowest first.
pub struct BitboardSquareIterator {
    bb: Bitboard,
}

impl Iterator for BitboardSquareIterator {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        let maybe_square = self.bb.get_lowest_square();
        self.bb.clear_lowest_square();
        maybe_square
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bb.len();
        (size, Some(size))
    }
}
impl ExactSizeIterator for BitboardSquareIterator {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardSquareIterator;
    fn into_iter(self) -> Self::IntoIter {
        BitboardSquareIterator { bb: self }
    }
}

/// Rank 8 first, `1` for a member square and `.` otherwise.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(NUM_SQUARES + NUM_RANKS);
        for rank in (0..NUM_RANKS).rev() {
            for file in 0..NUM_FILES {
                let bit = 1u64 << (rank * NUM_FILES + file);
                buf.push(if self.0 & bit != 0 { '1' } else { '.' });
            }
            buf.push('\n');
        }
        f.write_str(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_squares() {
        for square in [A1, A4, A8, D3, F6, H1, H8] {
            let bb = Bitboard::from(square);
            assert!(bb.has_square(square));
            assert_eq!(bb.len(), 1);
        }
        let bb: Bitboard = [A1, A2, A3].into_iter().collect();
        assert_eq!(bb.len(), 3);
        assert!(bb.has_square(A2));
    }

    #[test]
    fn shifts_do_not_wrap() {
        for square in [H1, H4, H8] {
            let bb = Bitboard::from(square);
            assert!(bb.to_east().is_empty());
            assert!(bb.to_north_east().is_empty());
            assert!(bb.to_south_east().is_empty());
        }
        for square in [A1, A5, A8] {
            let bb = Bitboard::from(square);
            assert!(bb.to_west().is_empty());
            assert!(bb.to_north_west().is_empty());
            assert!(bb.to_south_west().is_empty());
        }
        assert_eq!(Bitboard::from(D4).to_north_east(), Bitboard::from(E5));
        assert_eq!(Bitboard::from(D4).to_south_west(), Bitboard::from(C3));
        assert!(Bitboard::from(A1).to_south().is_empty());
    }

    #[test]
    fn rank_and_file_constants() {
        assert_eq!(Bitboard::RANK_8.0, 0xFF00000000000000);
        assert_eq!(Bitboard::RANK_2, bb_from_shifts!(A2, B2, C2, D2, E2, F2, G2, H2));
        assert_eq!(Bitboard::FILE_H, bb_from_shifts!(H1, H2, H3, H4, H5, H6, H7, H8));
    }

    #[test]
    fn lowest_and_highest() {
        let bb = bb_from_shifts!(C2, F7);
        assert_eq!(bb.get_lowest_square(), Some(C2));
        assert_eq!(bb.get_highest_square(), Some(F7));
        assert_eq!(Bitboard::EMPTY.get_lowest_square(), None);
        assert_eq!(Bitboard::EMPTY.get_highest_square(), None);

        let mut above = Bitboard::FULL;
        above.clear_square_and_above(A2);
        assert_eq!(above, Bitboard::RANK_1);
        let mut below = Bitboard::FULL;
        below.clear_square_and_below(H7);
        assert_eq!(below, Bitboard::RANK_8);
    }

    #[test]
    fn iterate_bitboard() {
        let squares: Vec<Square> = Bitboard::FILE_A.into_iter().collect();
        assert_eq!(squares, vec![A1, A2, A3, A4, A5, A6, A7, A8]);

        let mut empty = Bitboard::EMPTY.into_iter();
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn display_bitboard() {
        let text = (Bitboard::RANK_1 | Bitboard::from(H8)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ".......1");
        assert_eq!(lines[7], "11111111");
    }
}
