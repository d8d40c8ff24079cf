// src/config/consts.rs
use std::time::Duration;

// Net config
pub const BASE_URL: &str = "https://archiveofourown.org";
pub const SEARCH_PATH: &str = "/works/search";
pub const WORKS_PATH: &str = "/works/";
pub const USER_AGENT: &str = concat!("ao3_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Pacing floor before every request; the site does bot detection on cadence.
pub const REQUEST_PAUSE: Duration = Duration::from_secs(5);

// Scrape
pub const PAGE_SIZE: u32 = 20;
pub const WORK_ID_PREFIX: &str = "work_";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const EXPORT_PREFIX: &str = "documents_";
pub const EXPORT_EXT: &str = "csv";
pub const EXPORT_DELIM: char = ';';
pub const LIST_SEP: &str = ", ";

// Download
pub const DOWNLOAD_EXT: &str = "html";
pub const ID_COLUMN: &str = "id";

// Logging
pub const LOG_ENV: &str = "AO3_SCRAPE_LOG";
pub const LOG_DEFAULT_LEVEL: &str = "info";
