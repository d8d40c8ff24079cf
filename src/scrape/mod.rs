// src/scrape/mod.rs
pub mod download;
mod search;

pub use download::{download_from_file, download_work, DownloadSummary};
pub use search::{collect_works, SearchReport};
