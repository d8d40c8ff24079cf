// src/lib.rs
//! Paced metadata scraper for archiveofourown.org search results.
//!
//! `scrape::collect_works` turns a search query into one `MetadataRecord` per
//! result item across every results page; `file::export_dataset` writes them
//! out once. `scrape::download_work` saves a work's HTML export.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ScrapeError};
pub use store::{DataSet, Field, MetadataRecord, RecordStore};

#[doc(hidden)]
pub use tracing as __tracing;
