// tests/common/mod.rs
//
// Scripted transport + recording sleeper shared by the integration tests.
//
#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};

use ao3_scrape::core::{PacedFetcher, Response, Sleep, Transport};
use ao3_scrape::Result;

pub const BASE: &str = "https://example.org";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Sleep(Duration),
    Get(String),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Answers by exact URL, then by `&page=N` for search URLs; 404 otherwise.
pub struct Scripted {
    pub by_url: HashMap<String, Response>,
    pub by_page: HashMap<u32, Response>,
    pub log: Log,
}

impl Scripted {
    pub fn new(log: &Log) -> Self {
        Self { by_url: HashMap::new(), by_page: HashMap::new(), log: Rc::clone(log) }
    }

    pub fn page(mut self, n: u32, html: String) -> Self {
        self.by_page.insert(n, ok(html.into_bytes()));
        self
    }

    pub fn page_status(mut self, n: u32, status: u16) -> Self {
        self.by_page.insert(n, Response { status, body: Vec::new() });
        self
    }

    pub fn url(mut self, url: &str, body: &[u8]) -> Self {
        self.by_url.insert(url.to_string(), ok(body.to_vec()));
        self
    }
}

fn ok(body: Vec<u8>) -> Response {
    Response { status: 200, body }
}

impl Transport for Scripted {
    fn get(&mut self, url: &str) -> Result<Response> {
        self.log.borrow_mut().push(Event::Get(url.to_string()));
        if let Some(r) = self.by_url.get(url) {
            return Ok(r.clone());
        }
        let page = url
            .rsplit_once("&page=")
            .and_then(|(_, n)| n.parse::<u32>().ok());
        Ok(page
            .and_then(|n| self.by_page.get(&n).cloned())
            .unwrap_or(Response { status: 404, body: Vec::new() }))
    }
}

pub struct Recorder(pub Log);

impl Sleep for Recorder {
    fn sleep(&mut self, d: Duration) {
        self.0.borrow_mut().push(Event::Sleep(d));
    }
}

pub fn fetcher(transport: Scripted, log: &Log, pause: Duration) -> PacedFetcher<Scripted, Recorder> {
    PacedFetcher::with_sleeper(transport, Recorder(Rc::clone(log)), pause)
}

/// Page numbers of the search requests, in request order.
pub fn requested_pages(log: &Log) -> Vec<u32> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Get(url) => url.rsplit_once("&page=").and_then(|(_, n)| n.parse().ok()),
            Event::Sleep(_) => None,
        })
        .collect()
}

/// Minimal results page: declared total plus one bare item per id.
pub fn results_page(total: u32, ids: impl IntoIterator<Item = u32>) -> String {
    let items: String = ids
        .into_iter()
        .map(|id| {
            format!(
                r#"<li id="work_{id}" class="work blurb group" role="article">
                     <h4 class="heading"><a href="/works/{id}">Work {id}</a></h4>
                   </li>"#
            )
        })
        .collect();
    format!(
        r#"<html><body>
             <h3 class="heading">Edit Your Search</h3>
             <h3 class="heading">{total} Found</h3>
             <ol class="work index group">{items}</ol>
           </body></html>"#
    )
}
