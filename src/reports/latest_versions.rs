// src/reports/latest_versions.rs
//
// Version list from the documentation sidebar: "Python 3.13 (stable)" etc.

use regex::Regex;
use scraper::Html;

use crate::config::Config;
use crate::core::{attr, fetch, locate, locate_all, text, Fetch, TagQuery};
use crate::error::Result;
use crate::table::ReportTable;

pub const HEADER: [&str; 3] = ["Ссылка на документацию", "Версия", "Статус"];
pub const VERSION_PATTERN: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";

/// Anchors in the sidebar's first list whose text names a version; others are skipped.
pub fn version_rows(doc: &Html) -> Result<ReportTable> {
    let sidebar = locate(doc, TagQuery::new("div").attr("class", "sphinxsidebarwrapper"))?;
    let list = locate(sidebar, "ul")?;
    let pattern = Regex::new(VERSION_PATTERN)?;

    let mut table = ReportTable::new(HEADER.map(String::from).to_vec());
    for a in locate_all(list, "a") {
        let label = text(&a);
        let Some(caps) = pattern.captures(&label) else { continue };
        table.push_row(row![attr(&a, "href")?, &caps["version"], &caps["status"]])?;
    }
    Ok(table)
}

pub fn build(session: &dyn Fetch, config: &Config) -> Result<ReportTable> {
    let doc = fetch(session, &config.main_doc_url, config.encoding)?;
    version_rows(&doc)
}
