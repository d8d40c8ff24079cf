// src/scrape/search.rs
// Pagination controller: bootstrap the declared total, then page until
// either the item count or the page bound says stop.

use crate::{
    config::options::ScrapeOptions,
    core::{html::parse_document, PacedFetcher, Sleep, Transport},
    error::Result,
    progress::Progress,
    specs::{search::{search_url, SearchPage}, work::WorkRules},
    store::RecordStore,
};

/// What a finished search run produced, with the counters that stopped it.
#[derive(Debug)]
pub struct SearchReport {
    pub store: RecordStore,
    /// Count the site declared on the first page.
    pub total_results: u32,
    /// `ceil(total_results / page_size)`
    pub max_page: u32,
    /// Result pages fetched, bootstrap request not included.
    pub pages_fetched: u32,
    /// Sum of per-page container counts.
    pub processed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cursor {
    total: u32,
    max_page: u32,
    page: u32,
    processed: usize,
}

impl Cursor {
    /// Both bounds must hold. The page bound stops a run whose declared
    /// total is stale and whose pages run dry early.
    fn has_next(&self) -> bool {
        self.processed < self.total as usize && self.page <= self.max_page
    }
}

enum Phase {
    Bootstrap,
    Paging(Cursor),
    Done(Cursor),
}

/// Run the whole search for `opts.query` and collect every result item.
///
/// One paced request reads the declared total from page 1, then pages
/// 1..=max_page are fetched in order (page 1 again, with its own pause).
/// Nothing is fetched once the stop condition already holds, so there is no
/// trailing pause after the last page. Transport errors end the run.
pub fn collect_works<T: Transport, S: Sleep>(
    opts: &ScrapeOptions,
    fetcher: &mut PacedFetcher<T, S>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<SearchReport> {
    let page_parser = SearchPage::new();
    let rules = WorkRules::new(opts.base_url.as_str());
    let mut store = RecordStore::new();
    let mut pages_fetched = 0u32;

    let mut phase = Phase::Bootstrap;
    let cursor = loop {
        phase = match phase {
            Phase::Bootstrap => {
                let body = fetcher.fetch(&search_url(&opts.base_url, &opts.query, 1))?;
                let total = page_parser.total_results(&parse_document(&body))?;
                let max_page = total.div_ceil(opts.page_size.max(1));
                logf!("{total} results for {:?}, {max_page} page(s)", opts.query);

                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("{total} results, {max_page} page(s)"));
                    p.begin(max_page as usize);
                }
                Phase::Paging(Cursor { total, max_page, page: 1, processed: 0 })
            }

            Phase::Paging(cur) if !cur.has_next() => Phase::Done(cur),

            Phase::Paging(mut cur) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_start(cur.page as usize);
                }
                let body = fetcher.fetch(&search_url(&opts.base_url, &opts.query, cur.page))?;
                let doc = parse_document(&body);
                let (count, fragments) = page_parser.parse_page(&doc);
                store.extend(rules.extract_all(cur.page, &fragments));
                pages_fetched += 1;

                cur.processed += count;
                logd!("page {}/{}: {count} item(s), {}/{} processed", cur.page, cur.max_page, cur.processed, cur.total);
                cur.page += 1;
                Phase::Paging(cur)
            }

            Phase::Done(cur) => break cur,
        };
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("collected {} record(s) from {pages_fetched} page(s)", store.len());

    Ok(SearchReport {
        store,
        total_results: cursor.total,
        max_page: cursor.max_page,
        pages_fetched,
        processed: cursor.processed,
    })
}
