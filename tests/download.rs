// tests/download.rs
//
// Full-text downloader against a scripted transport and a temp directory.
//
mod common;

use std::{cell::RefCell, fs, rc::Rc, time::Duration};

use ao3_scrape::config::options::DownloadOptions;
use ao3_scrape::scrape::{download::read_work_ids, download_from_file, download_work};
use ao3_scrape::ScrapeError;

use common::{fetcher, Event, Log, Scripted, BASE};

const WORK_PAGE: &[u8] = br##"<html><body>
  <ul class="work navigation actions">
    <li class="download"><a href="#">Download</a>
      <ul class="expandable secondary">
        <li><a href="/downloads/1001/Long_Way.azw3?updated_at=1">AZW3</a></li>
        <li><a href="/downloads/1001/Long_Way.html?updated_at=1">HTML</a></li>
      </ul>
    </li>
  </ul></body></html>"##;

const NO_DOWNLOAD: &[u8] = b"<html><body><p>Restricted work</p></body></html>";

const EXPORT: &[u8] = b"<html><body><h1>The Long Way Round</h1></body></html>";

fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn gets(log: &Log) -> Vec<String> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Get(u) => Some(u.clone()),
            Event::Sleep(_) => None,
        })
        .collect()
}

#[test]
fn saves_html_export_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let log = new_log();
    let t = Scripted::new(&log)
        .url("https://example.org/works/1001", WORK_PAGE)
        .url("https://example.org/downloads/1001/Long_Way.html?updated_at=1", EXPORT);
    let mut f = fetcher(t, &log, Duration::from_secs(5));

    assert!(download_work(&mut f, BASE, "work_1001", dir.path()).unwrap());

    assert_eq!(fs::read(dir.path().join("1001.html")).unwrap(), EXPORT);
    assert_eq!(
        gets(&log),
        vec![
            "https://example.org/works/1001".to_string(),
            "https://example.org/downloads/1001/Long_Way.html?updated_at=1".to_string(),
        ]
    );
    // one pause per request
    let sleeps = log.borrow().iter().filter(|e| matches!(e, Event::Sleep(_))).count();
    assert_eq!(sleeps, 2);
}

#[test]
fn missing_link_reports_false_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log = new_log();
    let t = Scripted::new(&log).url("https://example.org/works/7", NO_DOWNLOAD);
    let mut f = fetcher(t, &log, Duration::ZERO);

    assert!(!download_work(&mut f, BASE, "7", dir.path()).unwrap());
    assert!(!dir.path().join("7.html").exists());
    assert_eq!(gets(&log).len(), 1);
}

#[test]
fn work_page_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let log = new_log();
    let mut f = fetcher(Scripted::new(&log), &log, Duration::ZERO);

    let err = download_work(&mut f, BASE, "work_404", dir.path()).unwrap_err();
    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
}

#[test]
fn reads_id_column_from_metadata_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("documents_x.csv");
    fs::write(&input, "page;id;title\n1;work_1001;A\n1;work_7;\"B;C\"\n2;;D\n").unwrap();

    assert_eq!(read_work_ids(&input, ';').unwrap(), vec!["work_1001", "work_7"]);

    fs::write(&input, "page;title\n1;A\n").unwrap();
    assert!(matches!(read_work_ids(&input, ';'), Err(ScrapeError::Input(_))));
}

#[test]
fn downloads_every_listed_work_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ids.csv");
    fs::write(&input, "id\nwork_1001\nwork_7\n").unwrap();
    let out = dir.path().join("works");

    let log = new_log();
    let t = Scripted::new(&log)
        .url("https://example.org/works/1001", WORK_PAGE)
        .url("https://example.org/downloads/1001/Long_Way.html?updated_at=1", EXPORT)
        .url("https://example.org/works/7", NO_DOWNLOAD);
    let mut f = fetcher(t, &log, Duration::ZERO);

    let opts = DownloadOptions { base_url: BASE.into(), ..DownloadOptions::new(&input, &out) };
    let summary = download_from_file(&opts, &mut f, None).unwrap();

    assert_eq!(summary.written, vec![out.join("1001.html")]);
    assert_eq!(summary.missing, vec!["7".to_string()]);
    assert!(out.is_dir());
    assert_eq!(f.requests(), 3);
}

#[test]
fn error_status_skips_the_work_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ids.csv");
    fs::write(&input, "id\nwork_404\nwork_1001\n").unwrap();
    let out = dir.path().join("works");

    let log = new_log();
    let t = Scripted::new(&log)
        .url("https://example.org/works/1001", WORK_PAGE)
        .url("https://example.org/downloads/1001/Long_Way.html?updated_at=1", EXPORT);
    let mut f = fetcher(t, &log, Duration::ZERO);

    let opts = DownloadOptions { base_url: BASE.into(), ..DownloadOptions::new(&input, &out) };
    let summary = download_from_file(&opts, &mut f, None).unwrap();

    assert_eq!(summary.missing, vec!["404".to_string()]);
    assert_eq!(summary.written, vec![out.join("1001.html")]);
    assert_eq!(fs::read(out.join("1001.html")).unwrap(), EXPORT);
    assert_eq!(f.requests(), 3);
}
