//! The chess board: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece kinds of the back rank from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete chess position state.
///
/// Boards are small `Copy` values. Every operation that changes the position
/// returns a new board and leaves `self` untouched.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Bitboard for each piece kind, indexed by [`PieceKind::index()`].
    pieces: [Bitboard; PieceKind::COUNT],
    /// Bitboard for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
    /// Union of both sides.
    occupied: Bitboard,
    side_to_move: Color,
    castling: CastleRights,
    /// En passant target square, if any.
    en_passant: Option<Square>,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
}

impl Board {
    /// An empty board with White to move and no rights.
    pub fn empty() -> Board {
        Board {
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for file in File::ALL {
                let officer = Piece::new(BACK_RANK[file.index()], color);
                board.put(Square::new(color.back_rank(), file), officer);
                board.put(
                    Square::new(color.pawn_rank(), file),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.clear(sq);
        let kind = piece.kind().index();
        let color = piece.color().index();
        self.pieces[kind] = self.pieces[kind].with(sq);
        self.sides[color] = self.sides[color].with(sq);
        self.occupied = self.occupied.with(sq);
    }

    /// Remove any piece from `sq`.
    pub(crate) fn clear(&mut self, sq: Square) {
        for bb in self.pieces.iter_mut().chain(self.sides.iter_mut()) {
            *bb = bb.without(sq);
        }
        self.occupied = self.occupied.without(sq);
    }

    /// Return the piece kind on the given square, if any.
    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.pieces[kind.index()].contains(sq))
    }

    /// Return the color of the piece on the given square, if any.
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.sides[color.index()].contains(sq))
    }

    /// Return the colored piece on the given square, if any.
    pub fn colored_piece_on(&self, sq: Square) -> Option<Piece> {
        Some(Piece::new(self.piece_on(sq)?, self.color_on(sq)?))
    }

    /// Return the bitboard for the given piece kind (both colors).
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Return the bitboard of `kind` pieces belonging to `color`.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[kind.index()] & self.sides[color.index()]
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the occupied squares bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    /// Return the square of the king for the given side, or `None` on a
    /// board under construction that has none yet.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(PieceKind::King, color).lsb()
    }

    /// Return the number of pawns of either color.
    #[inline]
    pub fn pawn_count(&self) -> u32 {
        self.pieces(PieceKind::Pawn).count()
    }

    /// Return `true` if any pawn of either color is on the board.
    #[inline]
    pub fn has_pawns(&self) -> bool {
        self.pieces(PieceKind::Pawn).is_nonempty()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Copy the position with every bitboard passed through `flip`, trading
    /// the two sides' sets when `swap_colors` is set. Everything else,
    /// including the en passant square, carries over unchanged.
    pub(crate) fn remap(&self, flip: impl Fn(Bitboard) -> Bitboard, swap_colors: bool) -> Board {
        let mut board = *self;
        board.pieces = self.pieces.map(&flip);
        board.sides = self.sides.map(&flip);
        if swap_colors {
            board.sides.swap(Color::White.index(), Color::Black.index());
        }
        board.occupied = flip(self.occupied);
        board
    }

    /// Castling rights that the placement can still honour: each right needs
    /// its king on the e-file and its rook in the corner of its back rank.
    pub fn consistent_castling(&self) -> CastleRights {
        let mut rights = self.castling;
        for color in Color::ALL {
            let back = color.back_rank();
            let king_home = self
                .pieces_of(PieceKind::King, color)
                .contains(Square::new(back, File::FileE));
            for side in crate::castle_rights::CastleSide::ALL {
                let rook_home = self
                    .pieces_of(PieceKind::Rook, color)
                    .contains(Square::new(back, side.rook_file()));
                if !(king_home && rook_home) {
                    rights = rights.remove(CastleRights::flag(color, side));
                }
            }
        }
        rights
    }

    /// Check that each side has exactly one king.
    ///
    /// Positions are otherwise taken as given: pawns on a back rank or a side
    /// not to move that stands in check are accepted, as PGN setups allow.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces_of(PieceKind::King, color).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}
