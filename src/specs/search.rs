// src/specs/search.rs
// Search results page: URL, declared total, and the per-work containers.

use scraper::{ElementRef, Html, Selector};
use url::form_urlencoded::Serializer;

use crate::config::consts::SEARCH_PATH;
use crate::core::html::{attr, flat_text, selector};
use crate::error::{Result, ScrapeError};

/// One search hit, borrowed from its page's document.
#[derive(Clone, Copy, Debug)]
pub struct WorkFragment<'a> {
    /// Declared `id` attribute, e.g. `work_12345`. Empty if the container
    /// has none.
    pub id: &'a str,
    pub el: ElementRef<'a>,
}

/// Selectors for the search results page.
pub struct SearchPage {
    work: Selector,
    summary_heading: Selector,
}

impl Default for SearchPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPage {
    pub fn new() -> Self {
        Self {
            work: selector("li.work.blurb.group"),
            summary_heading: selector("h3.heading"),
        }
    }

    /// Item count and fragments, in document order. A page without any
    /// result container is `(0, [])`, not an error.
    pub fn parse_page<'a>(&self, doc: &'a Html) -> (usize, Vec<WorkFragment<'a>>) {
        let fragments: Vec<_> = doc
            .select(&self.work)
            .map(|el| WorkFragment { id: attr(el, "id").unwrap_or_default(), el })
            .collect();
        (fragments.len(), fragments)
    }

    /// Total matching works as the site declares it: the leading count of
    /// the second `h3.heading` ("1,234 Found").
    pub fn total_results(&self, doc: &Html) -> Result<u32> {
        let heading = doc
            .select(&self.summary_heading)
            .nth(1)
            .ok_or(ScrapeError::MissingTotal)?;
        let text = flat_text(heading);
        parse_count(&text).ok_or_else(|| ScrapeError::InvalidTotal(text.trim().to_string()))
    }
}

fn parse_count(text: &str) -> Option<u32> {
    let first = text.split_whitespace().next()?;
    first.replace(',', "").parse().ok()
}

/// Full search URL for `query`, newest revisions last, for 1-based `page`.
pub fn search_url(base_url: &str, query: &str, page: u32) -> String {
    let params = Serializer::new(String::new())
        .append_pair("utf8", "✓")
        .append_pair("work_search[query]", query)
        .append_pair("work_search[title]", "")
        .append_pair("work_search[creators]", "")
        .append_pair("work_search[revised_at]", "")
        .append_pair("work_search[complete]", "")
        .append_pair("work_search[crossover]", "")
        .append_pair("work_search[single_chapter]", "0")
        .append_pair("work_search[word_count]", "")
        .append_pair("work_search[language_id]", "")
        .append_pair("work_search[fandom_names]", "")
        .append_pair("work_search[rating_ids]", "")
        .append_pair("work_search[character_names]", "")
        .append_pair("work_search[relationship_names]", "")
        .append_pair("work_search[freeform_names]", "")
        .append_pair("work_search[hits]", "")
        .append_pair("work_search[kudos_count]", "")
        .append_pair("work_search[comments_count]", "")
        .append_pair("work_search[bookmarks_count]", "")
        .append_pair("work_search[sort_column]", "revised_at")
        .append_pair("work_search[sort_direction]", "asc")
        .append_pair("commit", "Search")
        .append_pair("page", &page.to_string())
        .finish();

    format!("{}{}?{}", base_url.trim_end_matches('/'), SEARCH_PATH, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse_document;

    #[test]
    fn url_encodes_query_and_page() {
        let url = search_url("https://example.org/", "Harry Potter & co", 3);
        assert!(url.starts_with("https://example.org/works/search?utf8=%E2%9C%93&"));
        assert!(url.contains("work_search%5Bquery%5D=Harry+Potter+%26+co&"));
        assert!(url.contains("work_search%5Bsort_column%5D=revised_at"));
        assert!(url.contains("work_search%5Bsort_direction%5D=asc"));
        assert!(url.ends_with("&commit=Search&page=3"));
    }

    #[test]
    fn total_is_second_h3_heading() {
        let doc = parse_document(
            br#"<h3 class="heading">Edit Your Search</h3>
                <h3 class="heading">
                  1,234 Found
                </h3>"#,
        );
        assert_eq!(SearchPage::new().total_results(&doc).unwrap(), 1234);
    }

    #[test]
    fn total_missing_or_garbled() {
        let page = SearchPage::new();
        let one = parse_document(br#"<h3 class="heading">Only one</h3>"#);
        assert!(matches!(page.total_results(&one), Err(ScrapeError::MissingTotal)));

        let bad = parse_document(
            br#"<h3 class="heading">a</h3><h3 class="heading">No results</h3>"#,
        );
        match page.total_results(&bad) {
            Err(ScrapeError::InvalidTotal(t)) => assert_eq!(t, "No results"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn zero_containers_is_an_empty_page() {
        let doc = parse_document(b"<ol class=\"work index group\"></ol>");
        let (count, items) = SearchPage::new().parse_page(&doc);
        assert_eq!(count, 0);
        assert!(items.is_empty());
    }

    #[test]
    fn containers_come_back_in_document_order() {
        let doc = parse_document(
            br#"<ol>
                <li id="work_2" class="work blurb group">b</li>
                <li id="bookmark_1" class="bookmark blurb group">x</li>
                <li id="work_1" class="work blurb group work-1">a</li>
              </ol>"#,
        );
        let (count, items) = SearchPage::new().parse_page(&doc);
        assert_eq!(count, 2);
        let ids: Vec<_> = items.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["work_2", "work_1"]);
    }
}
