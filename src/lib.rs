//! Batch driver for chessflip: command line, configuration, and per-file
//! processing of PGN inputs.

pub mod batch;
pub mod cli;
pub mod config;

pub use batch::{RunReport, process_file, run};
pub use cli::Cli;
pub use config::RunConfig;
