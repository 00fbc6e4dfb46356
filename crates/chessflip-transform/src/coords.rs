//! Square maps for each symmetry.
//!
//! All four maps are involutions. Which board-level operation goes with a
//! map, and so whether colors swap, is decided by [`Symmetry`](crate::Symmetry).

use chessflip_core::Square;

/// Reflect across the horizontal midline: `rank' = 7 - rank`.
pub fn mirror(sq: Square) -> Square {
    sq.flip_rank()
}

/// Reflect across the vertical midline: `file' = 7 - file`.
pub fn hflip(sq: Square) -> Square {
    sq.flip_file()
}

/// Same square map as [`mirror`]; only the accompanying board operation
/// differs.
pub fn vflip(sq: Square) -> Square {
    sq.flip_rank()
}

/// Half-turn about the board centre.
pub fn rotate(sq: Square) -> Square {
    hflip(vflip(sq))
}
