//! The four supported board symmetries.

use std::fmt;

use chessflip_core::{Board, Square};

use crate::coords;

/// A geometric transform of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Flip ranks and swap colors.
    Mirror,
    /// Flip files (a-file to h-file).
    HorizontalFlip,
    /// Flip ranks, keeping colors.
    VerticalFlip,
    /// Half-turn: vertical flip followed by horizontal flip.
    Rotate,
}

impl Symmetry {
    /// Every symmetry in output order.
    pub const ALL: [Symmetry; 4] = [
        Symmetry::Mirror,
        Symmetry::HorizontalFlip,
        Symmetry::VerticalFlip,
        Symmetry::Rotate,
    ];

    /// Return the square map for this symmetry.
    pub fn square_map(self) -> fn(Square) -> Square {
        match self {
            Symmetry::Mirror => coords::mirror,
            Symmetry::HorizontalFlip => coords::hflip,
            Symmetry::VerticalFlip => coords::vflip,
            Symmetry::Rotate => coords::rotate,
        }
    }

    /// Apply the board-level operation that goes with this symmetry.
    pub fn transform_board(self, board: &Board) -> Board {
        match self {
            Symmetry::Mirror => board.mirror(),
            Symmetry::HorizontalFlip => board.flip_horizontal(),
            Symmetry::VerticalFlip => board.flip_vertical(),
            Symmetry::Rotate => board.flip_vertical().flip_horizontal(),
        }
    }

    /// Whether a castling move anywhere in the game rules this symmetry out.
    pub fn forbids_castling(self) -> bool {
        matches!(self, Symmetry::HorizontalFlip | Symmetry::Rotate)
    }

    /// Whether a pawn on the starting board rules this symmetry out.
    pub fn forbids_pawns(self) -> bool {
        matches!(self, Symmetry::VerticalFlip | Symmetry::Rotate)
    }

    /// Suffix appended to an input file stem to name the output file.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Symmetry::Mirror => "_mirrored",
            Symmetry::HorizontalFlip => "_hflipped",
            Symmetry::VerticalFlip => "_vflipped",
            Symmetry::Rotate => "_rotated",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Symmetry::Mirror => "mirror",
            Symmetry::HorizontalFlip => "hflip",
            Symmetry::VerticalFlip => "vflip",
            Symmetry::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use chessflip_core::{Board, Color, PieceKind, Square};

    use super::Symmetry;

    #[test]
    fn board_transform_matches_square_map() {
        let board: Board = "4k3/8/8/8/8/8/1N6/4K3 w - - 0 1".parse().unwrap();
        for symmetry in Symmetry::ALL {
            let image = symmetry.transform_board(&board);
            let knight = symmetry.square_map()(Square::B2);
            assert_eq!(image.piece_on(knight), Some(PieceKind::Knight), "{symmetry}");
        }
    }

    #[test]
    fn only_mirror_swaps_colors() {
        let board = Board::starting_position();
        for symmetry in Symmetry::ALL {
            let image = symmetry.transform_board(&board);
            let expected = if symmetry == Symmetry::Mirror { Color::Black } else { Color::White };
            assert_eq!(image.side_to_move(), expected, "{symmetry}");
        }
    }

    #[test]
    fn suffixes_are_distinct() {
        let suffixes: Vec<&str> = Symmetry::ALL.iter().map(|s| s.file_suffix()).collect();
        assert_eq!(suffixes, ["_mirrored", "_hflipped", "_vflipped", "_rotated"]);
        assert_eq!(Symmetry::Rotate.to_string(), "rotate");
    }
}
