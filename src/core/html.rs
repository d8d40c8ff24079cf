// src/core/html.rs
// Thin layer over `scraper`: the document capability the specs rely on.
// Find descendants by tag + class, read attributes, flatten text.

use scraper::{ElementRef, Html, Selector};

/// Parse a fetched body. Invalid UTF-8 is replaced, never rejected.
pub fn parse_document(body: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(body))
}

/// Compile a selector literal.
///
/// Only ever called with the fixed selectors of this crate, so a parse
/// failure is a programming error.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// All descendant text nodes, concatenated as rendered. No trimming.
pub fn flat_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// `rel="author"` style check on a whitespace-separated attribute.
pub fn has_token(el: ElementRef<'_>, name: &str, token: &str) -> bool {
    attr(el, name).is_some_and(|v| v.split_whitespace().any(|t| t == token))
}

/// Last match under `root`, in document order.
pub fn last_match<'a>(root: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    root.select(sel).last()
}
