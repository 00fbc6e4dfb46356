//! Run configuration.

use std::path::PathBuf;

use chessflip_transform::Symmetry;

use crate::cli::Cli;

/// What a run transforms and where it reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Symmetries to apply, in output order.
    pub symmetries: Vec<Symmetry>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            symmetries: Vec::new(),
            input_dir: PathBuf::from("in"),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let selected = [
            (cli.mirror, Symmetry::Mirror),
            (cli.hflip, Symmetry::HorizontalFlip),
            (cli.vflip, Symmetry::VerticalFlip),
            (cli.rotate, Symmetry::Rotate),
        ];
        Self {
            symmetries: selected
                .into_iter()
                .filter_map(|(on, symmetry)| on.then_some(symmetry))
                .collect(),
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use chessflip_transform::Symmetry;

    use super::RunConfig;
    use crate::cli::Cli;

    #[test]
    fn symmetries_follow_fixed_order() {
        let config = RunConfig::from(Cli::parse_from(["chessflip", "-r", "-m", "-v"]));
        assert_eq!(
            config.symmetries,
            [Symmetry::Mirror, Symmetry::VerticalFlip, Symmetry::Rotate]
        );
    }

    #[test]
    fn no_flags_selects_nothing() {
        let config = RunConfig::from(Cli::parse_from(["chessflip"]));
        assert_eq!(config, RunConfig::default());
    }
}
