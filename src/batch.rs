//! Per-file batch driver.
//!
//! Every `*.pgn` in the input folder is read game by game. Each game is
//! transformed under every selected symmetry and written to that symmetry's
//! output file as soon as it is ready, so a file that fails halfway keeps
//! the games written before the failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use chessflip_pgn::{PgnReader, write_game};
use chessflip_transform::{Symmetry, TransformOutcome, TransformStats, transform_game};

use crate::config::RunConfig;

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Input files found.
    pub files: usize,
    /// Input files that stopped on an error.
    pub failed_files: usize,
    /// Games written and skipped, summed over all files.
    pub stats: TransformStats,
}

/// Process every input file named by `config`.
///
/// A failing file is logged and counted; the run moves on to the next one.
///
/// # Errors
///
/// Fails only when the input folder cannot be listed or the output folder
/// cannot be created.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let inputs = discover_inputs(&config.input_dir)?;
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output folder {}", config.output_dir.display())
    })?;

    let mut report = RunReport {
        files: inputs.len(),
        ..RunReport::default()
    };
    for path in &inputs {
        match process_file(path, config) {
            Ok(stats) => report.stats.merge(&stats),
            Err(err) => {
                error!(file = %path.display(), "{err:#}");
                report.failed_files += 1;
            }
        }
    }

    info!(
        files = report.files,
        failed = report.failed_files,
        written = report.stats.total_written(),
        skipped = report.stats.total_skipped(),
        "Done"
    );
    Ok(report)
}

/// `*.pgn` files directly inside `dir`, sorted by name.
fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("listing input folder {}", dir.display()))?;
    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("listing input folder {}", dir.display()))?.path();
        let is_pgn = path.extension().is_some_and(|ext| ext == "pgn");
        if is_pgn && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Path of the output file for `input` under `symmetry`.
fn output_path(output_dir: &Path, input: &Path, symmetry: Symmetry) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{stem}{}.pgn", symmetry.file_suffix()))
}

/// Transform every game of one input file.
///
/// # Errors
///
/// Any I/O failure, unreadable game, or game missing a required header ends
/// processing of this file.
pub fn process_file(path: &Path, config: &RunConfig) -> Result<TransformStats> {
    info!(file = %path.display(), "Processing file");

    let input = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut outputs = Vec::with_capacity(config.symmetries.len());
    for &symmetry in &config.symmetries {
        let out_path = output_path(&config.output_dir, path, symmetry);
        let file = File::create(&out_path).with_context(|| format!("creating {}", out_path.display()))?;
        outputs.push((symmetry, out_path, BufWriter::new(file)));
    }

    let mut stats = TransformStats::new();
    let result = transform_games(path, input, &mut outputs, &mut stats);
    for (_, out_path, writer) in &mut outputs {
        writer
            .flush()
            .with_context(|| format!("writing {}", out_path.display()))?;
    }
    result?;

    info!(file = %path.display(), %stats, "Finished file");
    Ok(stats)
}

fn transform_games(
    path: &Path,
    input: File,
    outputs: &mut [(Symmetry, PathBuf, BufWriter<File>)],
    stats: &mut TransformStats,
) -> Result<()> {
    let reader = PgnReader::new(BufReader::new(input));
    for (index, game) in reader.enumerate() {
        let number = index + 1;
        let game = game.with_context(|| format!("{}: game {number}", path.display()))?;

        for (symmetry, out_path, writer) in outputs.iter_mut() {
            let outcome = transform_game(&game, *symmetry)
                .with_context(|| format!("{}: game {number}", path.display()))?;
            match outcome {
                TransformOutcome::Transformed(transformed) => {
                    write_game(writer, &transformed)
                        .with_context(|| format!("writing {}", out_path.display()))?;
                    writer
                        .write_all(b"\n\n")
                        .with_context(|| format!("writing {}", out_path.display()))?;
                    stats.record_written(*symmetry);
                }
                TransformOutcome::Infeasible(infeasible) => {
                    debug!(game = number, symmetry = %infeasible.symmetry, reason = %infeasible.reason, "skipped");
                    stats.record_skipped(*symmetry);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chessflip_transform::Symmetry;

    use super::output_path;

    #[test]
    fn output_names_carry_suffix() {
        let path = output_path(Path::new("out"), Path::new("in/games.pgn"), Symmetry::HorizontalFlip);
        assert_eq!(path, Path::new("out").join("games_hflipped.pgn"));
        let path = output_path(Path::new("out"), Path::new("in/a.b.pgn"), Symmetry::Rotate);
        assert_eq!(path, Path::new("out").join("a.b_rotated.pgn"));
    }
}
