//! Chess board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::file::File;
use crate::rank::Rank;

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(rank, file))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Return the square on the same file with the rank mirrored (a2 <-> a7).
    #[inline]
    pub const fn flip_rank(self) -> Square {
        Square(self.0 ^ 0b111_000)
    }

    /// Return the square on the same rank with the file mirrored (b3 <-> g3).
    #[inline]
    pub const fn flip_file(self) -> Square {
        Square(self.0 ^ 0b000_111)
    }

    /// Step `ranks` up and `files` right, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, ranks: i8, files: i8) -> Option<Square> {
        let rank = (self.0 / 8) as i8 + ranks;
        let file = (self.0 % 8) as i8 + files;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

/// Define the named square constants one rank at a time.
macro_rules! rank_squares {
    ($($rank:literal => $a:ident $b:ident $c:ident $d:ident $e:ident $f:ident $g:ident $h:ident;)*) => {
        impl Square {
            $(
                pub const $a: Square = Square($rank * 8);
                pub const $b: Square = Square($rank * 8 + 1);
                pub const $c: Square = Square($rank * 8 + 2);
                pub const $d: Square = Square($rank * 8 + 3);
                pub const $e: Square = Square($rank * 8 + 4);
                pub const $f: Square = Square($rank * 8 + 5);
                pub const $g: Square = Square($rank * 8 + 6);
                pub const $h: Square = Square($rank * 8 + 7);
            )*
        }
    };
}

rank_squares! {
    0 => A1 B1 C1 D1 E1 F1 G1 H1;
    1 => A2 B2 C2 D2 E2 F2 G2 H2;
    2 => A3 B3 C3 D3 E3 F3 G3 H3;
    3 => A4 B4 C4 D4 E4 F4 G4 H4;
    4 => A5 B5 C5 D5 E5 F5 G5 H5;
    5 => A6 B6 C6 D6 E6 F6 G6 H6;
    6 => A7 B7 C7 D7 E7 F7 G7 H7;
    7 => A8 B8 C8 D8 E8 F8 G8 H8;
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
