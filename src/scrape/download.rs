// src/scrape/download.rs
// Full-text downloader: work id → `<dir>/<id>.html`, one paced request for
// the work page and one for the HTML export.

use std::{fs, path::{Path, PathBuf}};

use crate::{
    config::{consts::{DOWNLOAD_EXT, ID_COLUMN, WORKS_PATH}, options::DownloadOptions},
    core::{html::parse_document, sanitize::bare_work_id, PacedFetcher, Sleep, Transport},
    csv::parse_rows,
    error::{Result, ScrapeError},
    file::ensure_directory,
    progress::Progress,
    specs::download::WorkPage,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub written: Vec<PathBuf>,
    /// Ids with no HTML download, or whose pages answered with an error status.
    pub missing: Vec<String>,
}

/// Fetch one work's HTML export into `dir`. `Ok(false)` when the work page
/// has no HTML download link. No retries.
pub fn download_work<T: Transport, S: Sleep>(
    fetcher: &mut PacedFetcher<T, S>,
    base_url: &str,
    work_id: &str,
    dir: &Path,
) -> Result<bool> {
    let id = bare_work_id(work_id);
    let base = base_url.trim_end_matches('/');

    let page = fetcher.fetch(&join!(base, WORKS_PATH, id))?;
    let doc = parse_document(&page);
    let Some(href) = WorkPage::new().html_link(&doc) else {
        return Ok(false);
    };

    let bytes = fetcher.fetch(&join!(base, href))?;
    fs::write(work_path(dir, id), bytes)?;
    Ok(true)
}

pub fn work_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(join!(id, ".", DOWNLOAD_EXT))
}

/// Ids from the `id` column of a delimited file, in file order.
pub fn read_work_ids(path: &Path, delim: char) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let mut rows = parse_rows(&text, delim).into_iter();

    let header = rows
        .next()
        .ok_or_else(|| ScrapeError::Input(format!("{} is empty", path.display())))?;
    let col = header
        .iter()
        .position(|h| h.trim() == ID_COLUMN)
        .ok_or_else(|| ScrapeError::Input(format!("no `{ID_COLUMN}` column in {}", path.display())))?;

    Ok(rows
        .filter_map(|r| r.get(col).map(|c| s!(c.trim())))
        .filter(|id| !id.is_empty())
        .collect())
}

/// Download every work listed in `opts.input`, in order. A work whose page
/// has no HTML link, or whose server answers with an error status, is logged
/// and skipped; network-level errors end the run.
pub fn download_from_file<T: Transport, S: Sleep>(
    opts: &DownloadOptions,
    fetcher: &mut PacedFetcher<T, S>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DownloadSummary> {
    let ids = read_work_ids(&opts.input, opts.input_delim)?;
    ensure_directory(&opts.out_dir)?;
    logf!("downloading {} work(s) into {}", ids.len(), opts.out_dir.display());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut summary = DownloadSummary::default();
    for (i, id) in ids.iter().enumerate() {
        let bare = bare_work_id(id);
        if let Some(p) = progress.as_deref_mut() {
            p.item_start(i + 1);
        }

        let saved = match download_work(fetcher, &opts.base_url, bare, &opts.out_dir) {
            Ok(saved) => saved,
            Err(ScrapeError::Status { url, status }) => {
                loge!("HTTP {status} for {url}");
                false
            }
            Err(e) => return Err(e),
        };

        if saved {
            summary.written.push(work_path(&opts.out_dir, bare));
        } else {
            loge!("work {bare} could not be downloaded");
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(bare);
            }
            summary.missing.push(s!(bare));
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
