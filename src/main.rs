use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chessflip::{Cli, RunConfig, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RunConfig::from(Cli::parse());
    info!(symmetries = config.symmetries.len(), "chessflip starting");

    let report = run(&config)?;
    if report.failed_files > 0 {
        bail!("{} of {} input file(s) failed", report.failed_files, report.files);
    }
    Ok(())
}
