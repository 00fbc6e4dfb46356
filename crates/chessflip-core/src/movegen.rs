//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece kind and then filtered by
//! playing each one and checking that the mover's king is not left attacked.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::file::File;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Buffer for generated moves.
///
/// Starts with room for 218 moves, the most any reachable position has, and
/// grows past that for contrived setups.
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(218),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        self.moves.retain(|&mv| keep(mv));
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Board {
    /// Generate every legal move in this position.
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(self)
    }
}

/// Generate every legal move for the side to move.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    let us = board.side_to_move();
    let them = us.flip();
    let friendly = board.side(us);

    gen_pawns(board, us, &mut list);

    let occupied = board.occupied();
    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        for src in board.pieces_of(kind, us) {
            let targets = match kind {
                PieceKind::Knight => knight_attacks(src),
                PieceKind::Bishop => bishop_attacks(src, occupied),
                PieceKind::Rook => rook_attacks(src, occupied),
                PieceKind::Queen => queen_attacks(src, occupied),
                _ => king_attacks(src),
            };
            for dst in targets & !friendly {
                list.push(Move::new(src, dst));
            }
        }
    }

    gen_castling(board, us, &mut list);

    // A king is never captured, even when a setup leaves it en prise.
    let kings = board.pieces(PieceKind::King);
    list.retain(|mv| {
        if kings.contains(mv.dest()) {
            return false;
        }
        let after = board.make_move(mv);
        after
            .king_square(us)
            .is_some_and(|king| !after.is_square_attacked(king, them))
    });
    list
}

fn gen_pawns(board: &Board, us: Color, list: &mut MoveList) {
    let enemies = board.side(us.flip());
    let last_rank = us.flip().back_rank();

    let mut push = |src: Square, dst: Square| {
        if dst.rank() == last_rank {
            for promo in PieceKind::PROMOTIONS {
                list.push(Move::new_promotion(src, dst, promo));
            }
        } else {
            list.push(Move::new(src, dst));
        }
    };

    for src in board.pieces_of(PieceKind::Pawn, us) {
        if let Some(one) = src.offset(us.forward(), 0).filter(|sq| !board.is_occupied(*sq)) {
            push(src, one);
            let two = one.offset(us.forward(), 0).filter(|sq| !board.is_occupied(*sq));
            if let (true, Some(two)) = (src.rank() == us.pawn_rank(), two) {
                push(src, two);
            }
        }

        for dst in pawn_attacks(us, src) & enemies {
            push(src, dst);
        }

        // The en passant square only counts when a capturable pawn sits behind it.
        let victims = board.pieces_of(PieceKind::Pawn, us.flip());
        if let Some(ep) = board.en_passant().filter(|&ep| {
            pawn_attacks(us, src).contains(ep) && victims.contains(Square::new(src.rank(), ep.file()))
        }) {
            push(src, ep);
        }
    }
}

fn gen_castling(board: &Board, us: Color, list: &mut MoveList) {
    let back = us.back_rank();
    let king = Square::new(back, File::FileE);
    let them = us.flip();
    if !board.pieces_of(PieceKind::King, us).contains(king) || board.is_square_attacked(king, them) {
        return;
    }

    for side in CastleSide::ALL {
        let rook = Square::new(back, side.rook_file());
        if !board.castling().has(us, side) || !board.pieces_of(PieceKind::Rook, us).contains(rook) {
            continue;
        }

        let (lo, hi) = match side {
            CastleSide::KingSide => (File::FileF.index(), File::FileG.index()),
            CastleSide::QueenSide => (File::FileB.index(), File::FileD.index()),
        };
        let path_clear = File::ALL[lo..=hi]
            .iter()
            .all(|&file| !board.is_occupied(Square::new(back, file)));

        // The king crosses the file next to it and lands two files away.
        let dest = Square::new(back, side.king_dest_file());
        let transit = Square::new(back, side.rook_dest_file());
        let safe = !board.is_square_attacked(transit, them) && !board.is_square_attacked(dest, them);

        if path_clear && safe {
            list.push(Move::new(king, dest));
        }
    }
}

/// Count leaf nodes of the legal move tree to the given depth.
#[cfg(test)]
fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn startpos_has_twenty_moves() {
        assert_eq!(Board::starting_position().legal_moves().len(), 20);
    }

    #[test]
    fn perft_startpos() {
        let b = Board::starting_position();
        assert_eq!(perft(&b, 1), 20);
        assert_eq!(perft(&b, 2), 400);
        assert_eq!(perft(&b, 3), 8_902);
    }

    #[test]
    fn perft_kiwipete() {
        let b = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        assert_eq!(perft(&b, 1), 48);
        assert_eq!(perft(&b, 2), 2_039);
    }

    #[test]
    fn perft_position_3() {
        let b = board("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        assert_eq!(perft(&b, 1), 14);
        assert_eq!(perft(&b, 2), 191);
        assert_eq!(perft(&b, 3), 2_812);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let b = board("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1");
        assert!(b.legal_moves().iter().all(|mv| mv.source() != Square::E2));
    }

    #[test]
    fn double_check_only_king_moves() {
        let b = board("4k3/8/8/8/8/5n2/8/r3K3 w - - 0 1");
        let moves = b.legal_moves();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.source() == Square::E1));
    }

    #[test]
    fn cannot_castle_through_check() {
        let b = board("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!b.legal_moves().as_slice().contains(&Move::new(Square::E1, Square::G1)));
    }

    #[test]
    fn castling_needs_empty_path() {
        let b = board("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
        let moves = b.legal_moves();
        assert!(moves.as_slice().contains(&Move::new(Square::E1, Square::G1)));
        assert!(!moves.as_slice().contains(&Move::new(Square::E1, Square::C1)));
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        let b = board("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
        assert!(!b.legal_moves().as_slice().contains(&Move::new(Square::B5, Square::C6)));
    }

    #[test]
    fn promotion_gives_four_moves() {
        let b = board("8/4P3/8/8/8/8/k7/7K w - - 0 1");
        let promos = b
            .legal_moves()
            .iter()
            .filter(|mv| mv.source() == Square::E7)
            .count();
        assert_eq!(promos, 4);
    }

    #[test]
    fn checkmate_has_no_moves() {
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(b.is_check());
        assert!(b.legal_moves().is_empty());
    }

    #[test]
    fn exposed_king_is_never_captured() {
        let b = board("4k3/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let moves = b.legal_moves();
        assert!(!moves.is_empty());
        assert!(!moves.as_slice().contains(&Move::new(Square::E2, Square::E8)));
    }

    #[test]
    fn crowded_position_fills_past_two_hundred() {
        let b = board("R6R/3Q4/1Q4Q1/4Q3/2Q4Q/Q4Q2/pp1Q4/kBNN1KB1 w - - 0 1");
        assert_eq!(b.legal_moves().len(), 218);
    }
}
