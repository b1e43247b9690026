//! Pseudo-legal move generation and attack sets.
//!
//! Generated moves respect occupancy but not check. `Position` filters them
//! by applying each one and testing whether the mover's king is attacked.

use crate::bitboard::Bitboard;
use crate::coretypes::{Castling, Color, Color::*, Move, PieceKind::*, Square, Square::*};
use crate::movelist::MoveList;

pub mod rays;
pub mod tables;

/// Generate castling moves and append to move list.
/// Castling is legal if there are no pieces between rook and king,
/// the king does not start in, pass through or land on an attacked square,
/// and the player has the matching castling right.
/// params:
/// moves - Move list to append to.
/// player - Player that is castling.
/// castling - Castling rights of the position.
/// occupied - All occupied squares on chess board.
/// attacked - All Squares directly attacked by opposite player.
pub fn legal_castling_moves(
    moves: &mut MoveList,
    player: Color,
    castling: Castling,
    occupied: Bitboard,
    attacked: Bitboard,
) {
    let (kingside, queenside, king_rank, king) = match player {
        White => (Castling::W_KING, Castling::W_QUEEN, Bitboard::RANK_1, E1),
        Black => (Castling::B_KING, Castling::B_QUEEN, Bitboard::RANK_8, E8),
    };
    let clear = |between: Bitboard, pass: Bitboard| {
        (occupied & between & king_rank).is_empty() && (attacked & pass & king_rank).is_empty()
    };

    if castling.has(kingside) && clear(Bitboard::KINGSIDE_BETWEEN, Bitboard::KINGSIDE_PASS) {
        let to = match player {
            White => G1,
            Black => G8,
        };
        moves.push(Move::new(king, to, None));
    }
    if castling.has(queenside) && clear(Bitboard::QUEENSIDE_BETWEEN, Bitboard::QUEENSIDE_PASS) {
        let to = match player {
            White => C1,
            Black => C8,
        };
        moves.push(Move::new(king, to, None));
    }
}

/// Generate all pseudo-legal pawn moves and append to move list.
/// params:
/// moves - move list to add new moves to.
/// pawns - Bitboard with squares of all pawns to generate moves for.
/// color - player to generate moves for.
/// occupied - All occupied squares on board.
/// them - All squares occupied by opposing player.
/// en_passant - Optional en-passant target square.
pub fn pawn_pseudo_moves(
    moves: &mut MoveList,
    pawns: Bitboard,
    color: Color,
    occupied: Bitboard,
    them: Bitboard,
    en_passant: Option<Square>,
) {
    // Pawns can attack the ep square as if it was occupied.
    let targets = match en_passant {
        Some(ep_square) => them | Bitboard::from(ep_square),
        None => them,
    };
    let promotion_rank = Bitboard::RANK_1 | Bitboard::RANK_8;

    for from in pawns {
        let pawn = Bitboard::from(from);
        let single_push = pawn_single_pushes(pawn, color) & !occupied;
        let double_push = pawn_single_pushes(single_push, color) & !occupied & double_push_rank(color);
        let attacks = pawn_attacks(pawn, color) & targets;

        for to in single_push | double_push | attacks {
            if promotion_rank.has_square(to) {
                for piece_kind in [Queen, Rook, Bishop, Knight] {
                    moves.push(Move::new(from, to, Some(piece_kind)));
                }
            } else {
                moves.push(Move::new(from, to, None));
            }
        }
    }
}

/// Generate pseudo-legal moves for pieces whose targets are a function of origin only,
/// and append to move list. Targets occupied by the moving player are removed.
pub fn pattern_pseudo_moves<F>(moves: &mut MoveList, pieces: Bitboard, us: Bitboard, targets: F)
where
    F: Fn(Square) -> Bitboard,
{
    for from in pieces {
        for to in targets(from) & !us {
            moves.push(Move::new(from, to, None));
        }
    }
}

/// Generate all pseudo-legal knight moves and append to move list.
pub fn knight_pseudo_moves(moves: &mut MoveList, knights: Bitboard, us: Bitboard) {
    pattern_pseudo_moves(moves, knights, us, tables::knight_pattern);
}

/// Generate all pseudo-legal king moves, except castling, and append to move list.
pub fn king_pseudo_moves(moves: &mut MoveList, kings: Bitboard, us: Bitboard) {
    pattern_pseudo_moves(moves, kings, us, tables::king_pattern);
}

/// Generate all pseudo-legal rook moves and append to move list.
pub fn rook_pseudo_moves(moves: &mut MoveList, rooks: Bitboard, occupied: Bitboard, us: Bitboard) {
    pattern_pseudo_moves(moves, rooks, us, |from| rays::rook_rays(from, occupied));
}

/// Generate all pseudo-legal bishop moves and append to move list.
pub fn bishop_pseudo_moves(
    moves: &mut MoveList,
    bishops: Bitboard,
    occupied: Bitboard,
    us: Bitboard,
) {
    pattern_pseudo_moves(moves, bishops, us, |from| rays::bishop_rays(from, occupied));
}

/// Generate all pseudo-legal queen moves and append to move list.
pub fn queen_pseudo_moves(
    moves: &mut MoveList,
    queens: Bitboard,
    occupied: Bitboard,
    us: Bitboard,
) {
    pattern_pseudo_moves(moves, queens, us, |from| {
        rays::rook_rays(from, occupied) | rays::bishop_rays(from, occupied)
    });
}

/// Pawns of color shifted one square forward, ignoring occupancy.
pub fn pawn_single_pushes(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        White => pawns.to_north(),
        Black => pawns.to_south(),
    }
}

/// Rank a pawn of color lands on after a double push.
fn double_push_rank(color: Color) -> Bitboard {
    match color {
        White => Bitboard(Bitboard::RANK_1.0 << 24),
        Black => Bitboard(Bitboard::RANK_1.0 << 32),
    }
}

/// Squares attacked by all pawns of a color, in constant time.
pub fn pawn_attacks(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        White => pawns.to_north_east() | pawns.to_north_west(),
        Black => pawns.to_south_east() | pawns.to_south_west(),
    }
}

/// Squares attacked by all knights.
pub fn knight_attacks(knights: Bitboard) -> Bitboard {
    knights
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, square| acc | tables::knight_pattern(square))
}

/// Squares attacked by all kings.
pub fn king_attacks(kings: Bitboard) -> Bitboard {
    kings
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, square| acc | tables::king_pattern(square))
}

/// Squares attacked by all sliding pieces. Queens are passed in both sets.
pub fn slide_attacks(rooks: Bitboard, bishops: Bitboard, occupied: Bitboard) -> Bitboard {
    let orthogonal = rooks
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, from| acc | rays::rook_rays(from, occupied));
    bishops
        .into_iter()
        .fold(orthogonal, |acc, from| acc | rays::bishop_rays(from, occupied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::bb_from_shifts;

    #[test]
    fn pawn_pushes_and_attacks() {
        let mut moves = MoveList::new();
        let pawns = bb_from_shifts!(E2);
        pawn_pseudo_moves(&mut moves, pawns, White, pawns, Bitboard::EMPTY, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(E2, E3, None)));
        assert!(moves.contains(&Move::new(E2, E4, None)));

        // Blocked single push also blocks the double push.
        let mut moves = MoveList::new();
        let occupied = bb_from_shifts!(E7, E6);
        pawn_pseudo_moves(&mut moves, bb_from_shifts!(E7), Black, occupied, bb_from_shifts!(E6), None);
        assert!(moves.is_empty());

        assert_eq!(pawn_attacks(bb_from_shifts!(A2), White), bb_from_shifts!(B3));
        assert_eq!(pawn_attacks(bb_from_shifts!(D5), Black), bb_from_shifts!(C4, E4));
    }

    #[test]
    fn pawn_en_passant_and_promotion() {
        let mut moves = MoveList::new();
        let pawns = bb_from_shifts!(E5);
        let them = bb_from_shifts!(D5);
        pawn_pseudo_moves(&mut moves, pawns, White, pawns | them, them, Some(D6));
        assert!(moves.contains(&Move::new(E5, D6, None)));
        assert!(moves.contains(&Move::new(E5, E6, None)));

        let mut moves = MoveList::new();
        let pawns = bb_from_shifts!(B7);
        pawn_pseudo_moves(&mut moves, pawns, White, pawns, Bitboard::EMPTY, None);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&Move::new(B7, B8, Some(Knight))));
    }

    #[test]
    fn castling_requires_clear_and_safe_path() {
        let rooks = bb_from_shifts!(A1, H1);
        let king = bb_from_shifts!(E1);

        let mut moves = MoveList::new();
        legal_castling_moves(&mut moves, White, Castling::ALL, rooks | king, Bitboard::EMPTY);
        assert_eq!(moves.len(), 2);

        let mut moves = MoveList::new();
        let attacked = bb_from_shifts!(F1);
        legal_castling_moves(&mut moves, White, Castling::ALL, rooks | king, attacked);
        assert_eq!(moves.as_slice(), &[Move::new(E1, C1, None)]);

        let mut moves = MoveList::new();
        let blocked = rooks | king | bb_from_shifts!(B1);
        legal_castling_moves(&mut moves, White, Castling::W_KING, blocked, Bitboard::EMPTY);
        assert_eq!(moves.as_slice(), &[Move::new(E1, G1, None)]);

        // Attacks on b1 do not matter for queenside castling.
        let mut moves = MoveList::new();
        legal_castling_moves(&mut moves, White, Castling::W_QUEEN, rooks | king, bb_from_shifts!(B1));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn slider_attacks() {
        let occupied = bb_from_shifts!(A1, A4);
        let attacks = slide_attacks(bb_from_shifts!(A1), Bitboard::EMPTY, occupied);
        assert!(attacks.has_square(A4));
        assert!(!attacks.has_square(A5));
        assert!(attacks.has_square(H1));
    }
}
