// src/reports/whats_new.rs
//
// "What's New" index → one row per article: link, title, editors.

use scraper::Html;
use url::Url;

use crate::config::{join_url, Config};
use crate::core::sanitize::normalize_ws;
use crate::core::{attr, fetch, locate, locate_all, text, Fetch, TagQuery};
use crate::error::Result;
use crate::progress::Progress;
use crate::table::ReportTable;

pub const HEADER: [&str; 3] = ["Ссылка на статью", "Заголовок", "Редактор, автор"];

/// Absolute links of every top-level toctree entry on the index page.
pub fn article_links(doc: &Html, index_url: &Url) -> Result<Vec<Url>> {
    locate_all(doc, TagQuery::new("li").attr("class", "toctree-l1"))
        .into_iter()
        .map(|li| -> Result<Url> {
            let a = locate(li, "a")?;
            join_url(index_url, attr(&a, "href")?)
        })
        .collect()
}

/// (link, title, editors) for one article page.
pub fn article_row(page: &Html, link: &Url) -> Result<Vec<String>> {
    let title = normalize_ws(&text(&locate(page, "h1")?));
    let editors = normalize_ws(&text(&locate(page, "dl")?).replace('\n', " "));
    Ok(row![link.as_str(), title, editors])
}

pub fn build(session: &dyn Fetch, config: &Config, progress: &mut dyn Progress) -> Result<ReportTable> {
    let index_url = config.whats_new_url()?;
    let index = fetch(session, &index_url, config.encoding)?;
    let links = article_links(&index, &index_url)?;

    let mut table = ReportTable::new(HEADER.map(String::from).to_vec());
    let mut connection_errors = Vec::new();

    progress.begin(links.len());
    for link in links {
        match fetch(session, &link, config.encoding) {
            Err(e) => connection_errors.push(e),
            Ok(page) => table.push_row(article_row(&page, &link)?)?,
        }
        progress.item_done(link.as_str());
    }
    progress.finish();

    super::log_connection_errors(&connection_errors);
    Ok(table)
}
