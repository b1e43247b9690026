//! Attack rays for sliding pieces.

use crate::bitboard::Bitboard;
use crate::coretypes::Square;

type Direction = fn(&Bitboard) -> Bitboard;

const ORTHOGONAL: [Direction; 4] = [
    Bitboard::to_north,
    Bitboard::to_east,
    Bitboard::to_south,
    Bitboard::to_west,
];
const DIAGONAL: [Direction; 4] = [
    Bitboard::to_north_east,
    Bitboard::to_south_east,
    Bitboard::to_south_west,
    Bitboard::to_north_west,
];

/// Ray from origin exclusive to the first occupied square inclusive, along one direction.
#[inline(always)]
fn ray_scan(origin: Square, occupancy: Bitboard, direction: Direction) -> Bitboard {
    let mut ray = Bitboard::EMPTY;
    let mut head = direction(&Bitboard::from(origin));
    while !head.is_empty() {
        ray |= head;
        if occupancy.has_any(head) {
            break;
        }
        head = direction(&head);
    }
    ray
}

/// Squares attacked in the 4 orthogonal directions, each ray stopping on the first piece.
pub fn rook_rays(origin: Square, occupancy: Bitboard) -> Bitboard {
    ORTHOGONAL
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, dir| acc | ray_scan(origin, occupancy, dir))
}

/// Squares attacked in the 4 diagonal directions, each ray stopping on the first piece.
pub fn bishop_rays(origin: Square, occupancy: Bitboard) -> Bitboard {
    DIAGONAL
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, dir| acc | ray_scan(origin, occupancy, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::bb_from_shifts;
    use Square::*;

    #[test]
    fn rays_on_empty_board() {
        assert_eq!(rook_rays(A1, Bitboard::EMPTY).len(), 14);
        assert_eq!(bishop_rays(A1, Bitboard::EMPTY).len(), 7);
        assert_eq!(bishop_rays(D4, Bitboard::EMPTY).len(), 13);
    }

    #[test]
    fn rays_stop_on_first_piece() {
        let occupancy = bb_from_shifts!(D6, F4, B2);
        let rook = rook_rays(D4, occupancy);
        assert!(rook.has_square(D6));
        assert!(!rook.has_square(D7));
        assert!(rook.has_square(F4) && !rook.has_square(G4));
        assert!(rook.has_square(A4) && rook.has_square(D1));

        let bishop = bishop_rays(D4, occupancy);
        assert!(bishop.has_square(B2) && !bishop.has_square(A1));
        assert!(bishop.has_square(H8));
    }
}
