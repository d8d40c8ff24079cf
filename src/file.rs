// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_dataset;
use crate::error::{Result, ScrapeError};
use crate::store::DataSet;

/// Write the whole dataset once to `<out_dir>/documents_<query>.csv`.
/// Returns the path written to.
pub fn export_dataset(export: &ExportOptions, query: &str, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path(query);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    write_dataset(out, ds, export.include_headers, export.delim)?;
    logf!("wrote {} row(s) to {}", ds.rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Input(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
