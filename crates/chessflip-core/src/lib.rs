//! Core chess types: board representation, legal move generation, FEN and SAN.

mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod rank;
mod san;
mod square;
mod symmetry;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, SanError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use movegen::{MoveList, generate_legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
