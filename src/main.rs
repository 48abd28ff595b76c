//! CLI entry point for the tile map generator

use clap::Parser;
use wavetile::io::cli::{Cli, Runner};

fn main() -> wavetile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    Runner::new(cli).process().map(|_| ())
}
