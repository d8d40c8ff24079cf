// src/error.rs
//! Error type shared by the fetcher, the pagination controller and the
//! downloader.
//!
//! Only conditions that end a run live here. A field missing from a result
//! item, or a page with no items, is a normal outcome and never an error.

use thiserror::Error;

/// Result alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-level failure from the HTTP client.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The first results page carries no results-summary heading.
    #[error("results summary heading not found on first page")]
    MissingTotal,

    /// The results-summary heading does not start with a count.
    #[error("results summary is not a count: {0:?}")]
    InvalidTotal(String),

    /// Download input file is unusable (e.g. no `id` column).
    #[error("invalid input: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
