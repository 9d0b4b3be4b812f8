use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so that stdout only carries prompts and results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let options = cli.options();
    tracing::debug!("Running with {:?}", options);

    matrixes::session::run(&options, io::stdin().lock(), io::stdout().lock())
        .context("Could not process the matrix")
}
