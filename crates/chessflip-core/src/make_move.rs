//! Move classification and execution via copy-make.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Castling rights lost when a move starts or ends on each square.
const CASTLE_RIGHTS_REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_KING.insert(CastleRights::WHITE_QUEEN);
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::E8.index()] = CastleRights::BLACK_KING.insert(CastleRights::BLACK_QUEEN);
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Attack patterns are cast from the target square and intersected with
    /// the attacker's pieces of each kind.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        let occupied = self.occupied();
        let attackers = |kind| self.pieces_of(kind, by_color);

        // A pawn of `by_color` attacks `sq` iff a pawn of the other color on
        // `sq` would attack it back.
        (knight_attacks(sq) & attackers(PieceKind::Knight)).is_nonempty()
            || (king_attacks(sq) & attackers(PieceKind::King)).is_nonempty()
            || (pawn_attacks(by_color.flip(), sq) & attackers(PieceKind::Pawn)).is_nonempty()
            || (rook_attacks(sq, occupied) & (attackers(PieceKind::Rook) | attackers(PieceKind::Queen)))
                .is_nonempty()
            || (bishop_attacks(sq, occupied) & (attackers(PieceKind::Bishop) | attackers(PieceKind::Queen)))
                .is_nonempty()
    }

    /// Return `true` if the side to move is in check.
    pub fn is_check(&self) -> bool {
        let us = self.side_to_move();
        self.king_square(us)
            .is_some_and(|king| self.is_square_attacked(king, us.flip()))
    }

    /// Return the castling side if `mv` is a castling move on this board.
    ///
    /// A castling move is the side to move's king stepping two files along
    /// its own back rank from the e-file.
    pub fn castle_side(&self, mv: Move) -> Option<CastleSide> {
        let us = self.side_to_move();
        let src = mv.source();
        let dst = mv.dest();
        if mv.drop().is_some()
            || !self.pieces_of(PieceKind::King, us).contains(src)
            || src != Square::new(us.back_rank(), File::FileE)
            || dst.rank() != src.rank()
        {
            return None;
        }
        CastleSide::ALL
            .into_iter()
            .find(|side| dst.file() == side.king_dest_file())
    }

    /// Return `true` if `mv` is a castling move on this board.
    pub fn is_castling(&self, mv: Move) -> bool {
        self.castle_side(mv).is_some()
    }

    /// Return `true` if `mv` is an en passant capture on this board.
    pub fn is_en_passant(&self, mv: Move) -> bool {
        mv.drop().is_none()
            && self.en_passant() == Some(mv.dest())
            && self
                .pieces_of(PieceKind::Pawn, self.side_to_move())
                .contains(mv.source())
            && mv.source().file() != mv.dest().file()
            && !self.is_occupied(mv.dest())
    }

    /// Return `true` if `mv` captures a piece, en passant included.
    pub fn is_capture(&self, mv: Move) -> bool {
        let them = self.side_to_move().flip();
        (self.side(them).contains(mv.dest()) && !self.is_castling(mv)) || self.is_en_passant(mv)
    }

    /// Return `true` if `mv` is legal in this position.
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.drop().is_none() && self.legal_moves().as_slice().contains(&mv)
    }

    /// Play a legal move and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] if `mv` is not among the legal moves.
    pub fn play(&self, mv: Move) -> Result<Board, MoveError> {
        if self.is_legal(mv) {
            Ok(self.make_move(mv))
        } else {
            Err(MoveError::Illegal {
                mv,
                fen: self.to_string(),
            })
        }
    }

    /// Apply a move without checking legality. Copy-make: `self` is not modified.
    ///
    /// If the source square is empty the board is returned unchanged.
    pub(crate) fn make_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let us = b.side_to_move();
        let src = mv.source();
        let dst = mv.dest();

        let Some(moving) = b.piece_on(src) else {
            return b;
        };

        let castle = self.castle_side(mv);
        let en_passant = self.is_en_passant(mv);
        let is_capture = self.is_capture(mv);

        b.set_en_passant(None);

        if en_passant {
            b.clear(Square::new(src.rank(), dst.file()));
        }

        b.clear(src);
        let placed = match (moving, mv.promotion()) {
            (PieceKind::Pawn, Some(promo)) => promo,
            _ => moving,
        };
        b.put(dst, Piece::new(placed, us));

        if let Some(side) = castle {
            let back = us.back_rank();
            b.clear(Square::new(back, side.rook_file()));
            b.put(
                Square::new(back, side.rook_dest_file()),
                Piece::new(PieceKind::Rook, us),
            );
        }

        if moving == PieceKind::Pawn && src.rank().index().abs_diff(dst.rank().index()) == 2 {
            b.set_en_passant(src.offset(us.forward(), 0));
        }

        let revoked = CASTLE_RIGHTS_REVOKE[src.index()].insert(CASTLE_RIGHTS_REVOKE[dst.index()]);
        b.set_castling(b.castling().remove(revoked));

        if moving == PieceKind::Pawn || is_capture {
            b.set_halfmove_clock(0);
        } else {
            b.set_halfmove_clock(b.halfmove_clock().saturating_add(1));
        }

        if us == Color::Black {
            b.set_fullmove_number(b.fullmove_number().saturating_add(1));
        }
        b.set_side_to_move(us.flip());
        b
    }
}
