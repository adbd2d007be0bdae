// src/reports/pep.rs
//
// PEP status report: compare the status each PEP declares in the numerical
// index with the status on its own page, and count the latter.

use std::fmt;

use encoding_rs::Encoding;
use scraper::Html;
use tracing::{info, warn};
use url::Url;

use crate::config::{join_url, Config};
use crate::core::{attr, fetch, locate, locate_all, text, Fetch, TagQuery};
use crate::error::{NotFound, Result, ScrapeError};
use crate::progress::Progress;
use crate::table::ReportTable;
use crate::tally::StatusTally;

pub const NUMERICAL_INDEX_ID: &str = "numerical-index";
pub const PEP_LINK_CLASS: &str = "pep reference internal";

/// One index row whose page disagrees with the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMismatch {
    pub url: Url,
    pub declared: String,
    pub actual: String,
}

impl fmt::Display for StatusMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Несовпадающие статусы:\n{}\nСтатус в карточке: {}\nОжидаемый статус: {}",
            self.url, self.actual, self.declared
        )
    }
}

/// Everything one pass over the index produced.
#[derive(Clone, Debug, Default)]
pub struct Reconciliation {
    pub tally: StatusTally,
    pub mismatches: Vec<StatusMismatch>,
    pub connection_errors: Vec<NotFound>,
}

impl Reconciliation {
    /// Connection failures as one error line, each mismatch as its own warning.
    pub fn log_findings(&self) {
        super::log_connection_errors(&self.connection_errors);
        for m in &self.mismatches {
            warn!("{m}");
        }
    }

    pub fn into_table(self) -> ReportTable {
        self.tally.to_table()
    }
}

/// A row of the numerical index: what it claims, and where to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    pub declared: String,
    pub url: Url,
}

/// Second comma-separated field of the abbreviation title: "Process, Active" → "Active".
pub fn declared_status(title: &str) -> Result<&str> {
    title
        .split(", ")
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ScrapeError::MalformedStatus { title: s!(title) })
}

/// Rows of the numerical index table, header row skipped.
pub fn index_entries(doc: &Html, index_url: &Url) -> Result<Vec<IndexEntry>> {
    let section = locate(doc, TagQuery::new("section").attr("id", NUMERICAL_INDEX_ID))?;
    locate_all(section, "tr")
        .into_iter()
        .skip(1)
        .map(|tr| -> Result<IndexEntry> {
            let abbr = locate(tr, "abbr")?;
            let declared = declared_status(attr(&abbr, "title")?)?;
            let link = locate(tr, TagQuery::new("a").attr("class", PEP_LINK_CLASS))?;
            let url = join_url(index_url, attr(&link, "href")?)?;
            Ok(IndexEntry { declared: s!(declared), url })
        })
        .collect()
}

/// Status shown on a PEP's own page: text of its first abbreviation.
pub fn page_status(doc: &Html) -> Result<String> {
    Ok(text(&locate(doc, "abbr")?).trim().to_string())
}

/// Walk the index at `index_url`, fetch every PEP page, tally actual statuses.
///
/// The index itself must load; a PEP page that fails to load is recorded in
/// `connection_errors` and skipped. Missing markup on any page is fatal.
pub fn reconcile(
    session: &dyn Fetch,
    index_url: &Url,
    encoding: &'static Encoding,
    progress: &mut dyn Progress,
) -> Result<Reconciliation> {
    let index = fetch(session, index_url, encoding)?;
    let entries = index_entries(&index, index_url)?;
    info!("PEP в индексе: {}", entries.len());

    let mut out = Reconciliation::default();
    progress.begin(entries.len());
    for entry in entries {
        match fetch(session, &entry.url, encoding) {
            Err(e) => out.connection_errors.push(e),
            Ok(page) => {
                let actual = page_status(&page)?;
                out.tally.increment(&actual);
                if actual != entry.declared {
                    out.mismatches.push(StatusMismatch {
                        url: entry.url.clone(),
                        declared: entry.declared,
                        actual,
                    });
                }
            }
        }
        progress.item_done(entry.url.as_str());
    }
    progress.finish();
    Ok(out)
}

pub fn build(session: &dyn Fetch, config: &Config, progress: &mut dyn Progress) -> Result<ReportTable> {
    let result = reconcile(session, &config.pep_doc_url, config.encoding, progress)?;
    result.log_findings();
    Ok(result.into_table())
}
