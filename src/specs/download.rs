// src/specs/download.rs
// Work page: locate the "download as HTML" link.

use scraper::{Html, Selector};

use crate::core::html::{attr, flat_text, selector};

pub struct WorkPage {
    link: Selector,
}

impl Default for WorkPage {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkPage {
    pub fn new() -> Self {
        Self { link: selector("li.download a[href]") }
    }

    /// First anchor under a `li.download` whose text is exactly `HTML`, in
    /// document order. `None` when the page offers no such link.
    pub fn html_link<'a>(&self, doc: &'a Html) -> Option<&'a str> {
        doc.select(&self.link)
            .find(|a| flat_text(*a) == "HTML")
            .and_then(|a| attr(a, "href"))
    }
}
