mod app;
mod cli;
mod config;
mod paths;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    app::run(cli)
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("PLAYALL_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("playall=debug")
        } else {
            EnvFilter::new("playall=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
