// src/cli.rs
use std::{path::PathBuf, time::{Duration, Instant}};

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{consts::{BASE_URL, EXPORT_DELIM, REQUEST_PAUSE}, options::{AppOptions, DownloadOptions}},
    core::{HttpTransport, PacedFetcher},
    file,
    progress::StderrProgress,
    scrape,
};

#[derive(Parser, Debug)]
#[command(name = "ao3_scrape", version, about = "Paced metadata scraper for archiveofourown.org")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect metadata for every work matching a search into documents_<query>.csv
    Search(SearchArgs),
    /// Save the HTML export of every work listed in a metadata file
    Download(DownloadArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text search query
    pub query: String,

    /// Directory for the output file
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub net: NetArgs,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Delimited file with an `id` column
    pub input: PathBuf,

    /// Directory the `<id>.html` files go to (created if missing)
    pub out_dir: PathBuf,

    /// Field delimiter of the input file
    #[arg(long, default_value_t = EXPORT_DELIM)]
    pub delim: char,

    #[command(flatten)]
    pub net: NetArgs,
}

#[derive(Args, Debug)]
pub struct NetArgs {
    /// Seconds to wait before every request; values under 5 are raised to 5
    #[arg(long = "pause-secs", env = "AO3_SCRAPE_PAUSE_SECS", default_value = "5", value_parser = parse_pause)]
    pub pause: Duration,

    #[arg(long, env = "AO3_SCRAPE_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,
}

/// Seconds as a `Duration`, never below the pacing floor.
fn parse_pause(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    let pause = Duration::try_from_secs_f64(secs).map_err(|e| format!("{e}"))?;
    Ok(pause.max(REQUEST_PAUSE))
}

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let start = Instant::now();
    match cli.command {
        Command::Search(args) => search(args)?,
        Command::Download(args) => download(args)?,
    }
    eprintln!("Execution time {:.1}sec", start.elapsed().as_secs_f64());
    Ok(())
}

fn search(args: SearchArgs) -> color_eyre::Result<()> {
    let mut opts = AppOptions::for_query(args.query);
    opts.scrape.base_url = args.net.base_url.clone();
    opts.scrape.pause = args.net.pause;
    opts.export.out_dir = args.out_dir;

    let mut fetcher = PacedFetcher::new(HttpTransport::new()?, opts.scrape.pause);
    let mut progress = StderrProgress::new("page");
    let report = scrape::collect_works(&opts.scrape, &mut fetcher, Some(&mut progress))?;

    if report.processed < report.total_results as usize {
        logf!("site declared {} result(s), pages held {}", report.total_results, report.processed);
    }
    let path = file::export_dataset(&opts.export, &opts.scrape.query, &report.store.into_dataset())?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn download(args: DownloadArgs) -> color_eyre::Result<()> {
    let mut opts = DownloadOptions::new(args.input, args.out_dir);
    opts.input_delim = args.delim;
    opts.base_url = args.net.base_url.clone();
    opts.pause = args.net.pause;

    let mut fetcher = PacedFetcher::new(HttpTransport::new()?, opts.pause);
    let mut progress = StderrProgress::new("work");
    let summary = scrape::download_from_file(&opts, &mut fetcher, Some(&mut progress))?;

    println!(
        "Downloaded {} work(s) into {}, {} without HTML link",
        summary.written.len(),
        opts.out_dir.display(),
        summary.missing.len()
    );
    Ok(())
}
