// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use docs_scrape::core::Fetch;
use docs_scrape::progress::Progress;
use docs_scrape::NotFound;
use url::Url;

/// In-memory site: URL → body. Unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Vec<u8>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn requested(&self) -> Vec<String> { self.requests.borrow().clone() }
}

impl Fetch for FakeSite {
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, NotFound> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| NotFound::new(url.as_str(), "connection refused"))
    }
}

/// Records what the builders report, for asserting on.
#[derive(Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn item_done(&mut self, label: &str) { self.done.push(label.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

pub const PEP_INDEX: &str = "https://peps.python.org/";

/// Numerical index page with one row per (declared status, href).
pub fn pep_index(rows: &[(&str, &str)]) -> String {
    let mut body = String::from(
        r#"<html><body>
        <section id="index-by-category"><table><tr><th>x</th></tr>
          <tr><td><abbr title="Process, Rejected">PR</abbr></td>
              <td><a class="pep reference internal" href="pep-9999/">9999</a></td></tr>
        </table></section>
        <section id="numerical-index"><table class="pep-zero-table docutils align-default">
          <thead><tr><th>Status</th><th>PEP</th><th>Title</th></tr></thead><tbody>"#,
    );
    for (declared, href) in rows {
        body.push_str(&format!(
            r#"<tr><td><abbr title="Standards Track, {declared}">S</abbr></td>
               <td><a class="pep reference internal" href="{href}">n</a></td>
               <td>Title</td></tr>"#
        ));
    }
    body.push_str("</tbody></table></section></body></html>");
    body
}

/// A PEP page whose header table shows `status`.
pub fn pep_page(status: &str) -> String {
    format!(
        r#"<html><body><section id="pep-content"><h1>PEP</h1>
        <dl class="rfc2822 field-list simple">
          <dt class="field-odd">Author<span class="colon">:</span></dt><dd>Someone</dd>
          <dt class="field-even">Status<span class="colon">:</span></dt>
          <dd class="field-even"><abbr title="Currently valid informational guidance">{status}</abbr></dd>
        </dl></section></body></html>"#
    )
}
