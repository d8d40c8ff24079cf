// src/bin/cli.rs
use ao3_scrape::{cli, log};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Cli::parse())
}
