//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Write mirrored, flipped or rotated copies of every game in a folder of
/// PGN files.
#[derive(Debug, Parser)]
#[command(name = "chessflip", version, about)]
pub struct Cli {
    /// Mirror the board (swap colors, flip ranks)
    #[arg(short = 'm')]
    pub mirror: bool,

    /// Flip the board horizontally (left becomes right)
    #[arg(short = 'z')]
    pub hflip: bool,

    /// Flip the board vertically (top becomes bottom)
    #[arg(short = 'v')]
    pub vflip: bool,

    /// Rotate the board 180 degrees
    #[arg(short = 'r')]
    pub rotate: bool,

    /// Folder scanned for *.pgn inputs
    #[arg(long, default_value = "in")]
    pub input_dir: PathBuf,

    /// Folder the transformed files are written to
    #[arg(long, default_value = "out")]
    pub output_dir: PathBuf,
}
