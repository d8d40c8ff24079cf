// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the archive's markup. Each spec covers one page
//! type and encodes *where the data lives in the HTML* and *how to read it*.
//!
//! ## What lives here
//! - **Search URL shape** and the **results-summary count** (`search`).
//! - **Result page parsing**: the `li.work.blurb.group` containers, in
//!   document order (`search`).
//! - **Field extraction ruleset**: one independent rule per metadata column,
//!   applied to a single result item (`work`).
//! - **Download link lookup** on a work page (`download`).
//!
//! ## What does **not** live here
//! - Fetching, pacing, or deciding when to stop (`scrape`, `core::net`).
//! - Writing files (`file`, `csv`).
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_works → core::net::PacedFetcher::fetch
//!                       → specs::search::parse_page
//!                       → specs::work::WorkRules::extract  (per item)
//!                       → store::RecordStore
//! ```
//!
//! ## Conventions & invariants
//! - Everything here is pure: same document in, same output out.
//! - A missing element is `None`, never an error. One absent field never
//!   stops the other rules or drops the record.
//! - Specs are testable **offline** against saved HTML (`tests/fixtures`).
pub mod download;
pub mod search;
pub mod work;
