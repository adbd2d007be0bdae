// src/reports/download.rs
//
// Save the first archive linked from the documentation download table.

use std::path::PathBuf;

use scraper::Html;
use tracing::info;
use url::Url;

use crate::config::{join_url, Config};
use crate::core::sanitize::file_name_from_url;
use crate::core::{attr, fetch, locate, Fetch, TagQuery};
use crate::error::{Result, ScrapeError};
use crate::file::write_bytes;

/// First link inside `table.docutils`, resolved against the page.
pub fn archive_url(doc: &Html, page_url: &Url) -> Result<Url> {
    let table = locate(doc, TagQuery::new("table").attr("class", "docutils"))?;
    let link = locate(table, "a")?;
    join_url(page_url, attr(&link, "href")?)
}

/// Fetch the archive and write it under `downloads/`. Returns the saved path.
pub fn run(session: &dyn Fetch, config: &Config) -> Result<PathBuf> {
    let page_url = config.download_page_url()?;
    let doc = fetch(session, &page_url, config.encoding)?;
    let url = archive_url(&doc, &page_url)?;
    let name = file_name_from_url(&url).ok_or_else(|| ScrapeError::NoFileName { url: s!(url.as_str()) })?;

    let body = session.get_bytes(&url)?;
    let path = write_bytes(&config.downloads_dir(), &name, &body)?;
    info!("Архив был загружен и сохранён: {}", path.display());
    Ok(path)
}
