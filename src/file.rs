// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::{write_row, SEP};
use crate::error::{Result, ScrapeError};
use crate::table::ReportTable;

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::other("path exists but is not a directory");
        return Err(ScrapeError::io(dir, e));
    }
    fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))
}

/// Write the whole table (header first) as CSV to `dir/file_name`.
/// Returns the final path written to.
pub fn write_table_csv(table: &ReportTable, dir: &Path, file_name: &str) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(file_name);

    let file = File::create(&path).map_err(|e| ScrapeError::io(&path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for record in table.records() {
        write_row(&mut out, record, SEP).map_err(|e| ScrapeError::io(&path, e))?;
    }
    out.flush().map_err(|e| ScrapeError::io(&path, e))?;
    Ok(path)
}

/// Save a downloaded body as `dir/file_name`.
pub fn write_bytes(dir: &Path, file_name: &str, body: &[u8]) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, body).map_err(|e| ScrapeError::io(&path, e))?;
    Ok(path)
}
