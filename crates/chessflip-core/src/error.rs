//! Error types for FEN parsing, board validation, move application and SAN.

use std::fmt;

use crate::chess_move::Move;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string does not have 4 to 6 space-separated fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 4 to 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastlingChar { character } => {
                write!(f, "invalid castling character: '{character}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
}

/// Errors from applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not among the legal moves of the position.
    #[error("illegal move {mv} in position {fen}")]
    Illegal {
        /// The rejected move.
        mv: Move,
        /// FEN of the position it was played in.
        fen: String,
    },
}

/// Errors from resolving Standard Algebraic Notation against a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanError {
    /// The text is not syntactically SAN.
    #[error("malformed SAN: \"{san}\"")]
    Syntax {
        /// The offending text.
        san: String,
    },
    /// No legal move matches.
    #[error("no legal move matches \"{san}\"")]
    NoMatch {
        /// The offending text.
        san: String,
    },
    /// More than one legal move matches.
    #[error("ambiguous SAN \"{san}\" matches {count} moves")]
    Ambiguous {
        /// The offending text.
        san: String,
        /// Number of matching legal moves.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError};
    use crate::chess_move::Move;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert_eq!(format!("{err}"), "expected 4 to 6 FEN fields, found 2");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount { color: "white", count: 2 };
        assert_eq!(format!("{err}"), "expected 1 king for white, found 2");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::InvalidKingCount { color: "black", count: 0 }.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
    }

    #[test]
    fn move_error_names_the_move() {
        let err = MoveError::Illegal {
            mv: Move::new(Square::E2, Square::E5),
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        };
        assert!(format!("{err}").starts_with("illegal move e2e5"));
    }
}
