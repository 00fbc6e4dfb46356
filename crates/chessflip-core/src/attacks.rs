//! Attack sets for every piece type.
//!
//! Leaper attacks come from tables built at compile time. Slider attacks walk
//! rays until they hit the board edge or the first occupied square; the tool
//! replays recorded games, so a plain ray walk is fast enough.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            let r = rank + deltas[d].0;
            let f = file + deltas[d].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

const fn pawn_table(forward: i8) -> [Bitboard; 64] {
    leaper_table(&[(forward, -1), (forward, 1)])
}

static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);
static PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    pawn_table(Color::White.forward()),
    pawn_table(Color::Black.forward()),
];

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Return the squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(dr, df) in directions {
        let mut cursor = sq;
        while let Some(next) = cursor.offset(dr, df) {
            attacks = attacks.with(next);
            if occupied.contains(next) {
                break;
            }
            cursor = next;
        }
    }
    attacks
}

/// Return rook attacks from `sq` given `occupied` squares.
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

/// Return bishop attacks from `sq` given `occupied` squares.
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

/// Return queen attacks from `sq` given `occupied` squares.
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_counts() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
        assert_eq!(knight_attacks(Square::A1).count(), 2);
        assert!(knight_attacks(Square::G1).contains(Square::F3));
    }

    #[test]
    fn king_counts() {
        assert_eq!(king_attacks(Square::E4).count(), 8);
        assert_eq!(king_attacks(Square::H8).count(), 3);
    }

    #[test]
    fn pawn_attacks_do_not_wrap() {
        assert_eq!(pawn_attacks(Color::White, Square::A2), Bitboard::EMPTY.with(Square::B3));
        assert_eq!(pawn_attacks(Color::Black, Square::H7), Bitboard::EMPTY.with(Square::G6));
        assert_eq!(pawn_attacks(Color::White, Square::E4).count(), 2);
        assert!(pawn_attacks(Color::White, Square::E8).is_empty());
    }

    #[test]
    fn rook_stops_at_blockers() {
        let occupied = Bitboard::EMPTY.with(Square::E6).with(Square::C4);
        let attacks = rook_attacks(Square::E4, occupied);
        assert!(attacks.contains(Square::E6));
        assert!(!attacks.contains(Square::E7));
        assert!(attacks.contains(Square::C4));
        assert!(!attacks.contains(Square::B4));
        assert!(attacks.contains(Square::H4));
        assert!(attacks.contains(Square::E1));
    }

    #[test]
    fn bishop_on_empty_board() {
        assert_eq!(bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
        assert_eq!(queen_attacks(Square::D4, Bitboard::EMPTY).count(), 27);
    }
}
