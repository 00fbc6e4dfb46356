//! Chess move representation.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move as a pair of squares plus optional promotion and drop pieces.
///
/// The move carries no kind: whether it castles, captures en passant or
/// promotes is decided by the board it is played on. Castling is the king's
/// two-square step (`e1g1`), en passant is the pawn's diagonal step onto the
/// en passant square.
///
/// `drop` exists for variants that place a piece from the hand. A standard
/// board never accepts a move that sets it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PieceKind>,
    drop: Option<PieceKind>,
}

impl Move {
    /// Null move sentinel (A1→A1). Never a legal move.
    pub const NULL: Move = Move::new(Square::A1, Square::A1);

    /// Create a normal (quiet, capture, castling or en passant) move.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            promotion: None,
            drop: None,
        }
    }

    /// Create a promotion move.
    pub const fn new_promotion(source: Square, dest: Square, promo: PieceKind) -> Move {
        Move {
            source,
            dest,
            promotion: Some(promo),
            drop: None,
        }
    }

    /// Create a drop of `kind` onto `dest`. Source and destination coincide.
    pub const fn new_drop(kind: PieceKind, dest: Square) -> Move {
        Move {
            source: dest,
            dest,
            promotion: None,
            drop: Some(kind),
        }
    }

    /// Build a move from all four parts.
    pub const fn from_parts(
        source: Square,
        dest: Square,
        promotion: Option<PieceKind>,
        drop: Option<PieceKind>,
    ) -> Move {
        Move {
            source,
            dest,
            promotion,
            drop,
        }
    }

    /// Parse a UCI move string such as `e2e4` or `e7e8q`.
    pub fn from_uci(s: &str) -> Option<Move> {
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return None;
        }
        let source = Square::from_algebraic(&s[0..2])?;
        let dest = Square::from_algebraic(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_fen_char(c)? {
                PieceKind::Pawn | PieceKind::King => return None,
                kind => Some(kind),
            },
        };
        Some(Move::from_parts(source, dest, promotion, None))
    }

    /// Extract the source square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Extract the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The piece a pawn promotes to, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// The piece dropped from the hand, if any.
    #[inline]
    pub const fn drop(self) -> Option<PieceKind> {
        self.drop
    }

    /// Return `true` if this is the null move sentinel.
    pub fn is_null(self) -> bool {
        self == Move::NULL
    }

    /// Return the UCI string representation.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        if let Some(kind) = self.drop {
            return write!(f, "{}@{}", kind.san_char(), self.dest);
        }
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
