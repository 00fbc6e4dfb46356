//! Geometric transforms of a whole position.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::square::Square;

impl Board {
    /// Reflect the position across the horizontal midline and swap colors.
    ///
    /// The result is the same position seen from the other side: the side
    /// to move and the castling rights change hands, and the en passant
    /// square moves to the mirrored rank.
    pub fn mirror(&self) -> Board {
        let mut board = self.remap(Bitboard::flip_vertical, true);
        board.set_en_passant(self.en_passant().map(Square::flip_rank));
        board.set_side_to_move(self.side_to_move().flip());
        board.set_castling(self.castling().swap_colors());
        board
    }

    /// Reflect the position across the horizontal midline, keeping colors.
    ///
    /// White's pieces end up on Black's half. Castling rights that no longer
    /// match a king and rook on their home squares are dropped.
    pub fn flip_vertical(&self) -> Board {
        let mut board = self.remap(Bitboard::flip_vertical, false);
        board.set_en_passant(self.en_passant().map(Square::flip_rank));
        board.set_castling(self.castling().swap_colors());
        board.set_castling(board.consistent_castling());
        board
    }

    /// Reflect the position across the vertical midline (a-file to h-file).
    ///
    /// Kings leave the e-file, so castling rights are normally dropped.
    pub fn flip_horizontal(&self) -> Board {
        let mut board = self.remap(Bitboard::flip_horizontal, false);
        board.set_en_passant(self.en_passant().map(Square::flip_file));
        board.set_castling(self.castling().swap_sides());
        board.set_castling(board.consistent_castling());
        board
    }
}
