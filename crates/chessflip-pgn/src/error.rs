//! PGN reading and writing errors.

use chessflip_core::{FenError, MoveError, SanError};

/// Errors that can occur while reading or writing PGN.
#[derive(Debug, thiserror::Error)]
pub enum PgnError {
    /// A tag pair line could not be parsed.
    #[error("malformed tag on line {line}: {text}")]
    MalformedTag {
        /// One-based line number in the input.
        line: usize,
        /// The offending line.
        text: String,
    },

    /// The `FEN` tag does not describe a valid position.
    #[error("invalid FEN tag \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string from the tag.
        fen: String,
        /// Why it was rejected.
        source: FenError,
    },

    /// A movetext token does not name a legal move.
    #[error("bad move at ply {ply}: {source}")]
    InvalidSan {
        /// One-based ply of the move within the game.
        ply: usize,
        /// Why the token was rejected.
        source: SanError,
    },

    /// A resolved move could not be played.
    #[error("illegal move at ply {ply}: {source}")]
    IllegalMove {
        /// One-based ply of the move within the game.
        ply: usize,
        /// The board's verdict.
        source: MoveError,
    },

    /// A `{` comment runs past the end of the input.
    #[error("unterminated comment starting on line {line}")]
    UnterminatedComment {
        /// One-based line number where the comment opened.
        line: usize,
    },

    /// Movetext continues past the result token that ended the game.
    #[error("unexpected \"{text}\" after the game result on line {line}")]
    TextAfterResult {
        /// One-based line number of the stray text.
        line: usize,
        /// The first stray token.
        text: String,
    },

    /// An I/O error occurred while reading or writing.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
