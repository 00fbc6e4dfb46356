//! Mapping a single move through a square map.

use chessflip_core::{Move, Square};

/// Map both squares of `mv` through `square_map`, keeping its promotion and
/// drop pieces. No legality check is made.
pub fn transform_move(mv: Move, square_map: impl Fn(Square) -> Square) -> Move {
    Move::from_parts(
        square_map(mv.source()),
        square_map(mv.dest()),
        mv.promotion(),
        mv.drop(),
    )
}
