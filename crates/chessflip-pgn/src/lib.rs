//! PGN game records for chessflip: reading, writing, and the game model.

pub mod error;
pub mod game;
pub mod reader;
pub mod writer;

pub use error::PgnError;
pub use game::{Game, Headers, ROSTER};
pub use reader::PgnReader;
pub use writer::{game_to_string, write_game};
