// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            scrape: ScrapeOptions::new(query),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Free-text search, passed through to the site untouched.
    pub query: String,
    pub base_url: String,
    pub page_size: u32,
    pub pause: Duration,
}

impl ScrapeOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            base_url: s!(BASE_URL),
            page_size: PAGE_SIZE,
            pause: REQUEST_PAUSE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub delim: char,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            delim: EXPORT_DELIM,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/documents_<query stem>.csv`
    pub fn out_path(&self, query: &str) -> PathBuf {
        let stem = crate::core::sanitize::sanitize_query_filename(query);
        self.out_dir.join(join!(EXPORT_PREFIX, &stem, ".", EXPORT_EXT))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Delimited file with an `id` column (`work_<digits>` or bare digits).
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub input_delim: char,
    pub base_url: String,
    pub pause: Duration,
}

impl DownloadOptions {
    pub fn new(input: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir: out_dir.into(),
            input_delim: EXPORT_DELIM,
            base_url: s!(BASE_URL),
            pause: REQUEST_PAUSE,
        }
    }
}
