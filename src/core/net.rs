// src/core/net.rs
//
// One GET at a time through a shared session. Transport faults and non-2xx
// replies come back as `NotFound`; nothing here panics or retries.

use encoding_rs::Encoding;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{NotFound, Result, ScrapeError};
use crate::store::ResponseCache;

/// Anything that can hand back the raw body of a GET.
pub trait Fetch {
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, NotFound>;
}

/// Blocking HTTP client backed by an on-disk response cache.
pub struct Session {
    client: Client,
    cache: ResponseCache,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        let cache = ResponseCache::new(config.cache_dir(), config.cache_ttl);
        Ok(Self { client, cache })
    }

    pub fn clear_cache(&self) -> Result<()> {
        self.cache
            .clear()
            .map_err(|e| ScrapeError::io(self.cache.dir(), e))?;
        debug!("HTTP cache cleared: {}", self.cache.dir().display());
        Ok(())
    }

    fn get_network(&self, url: &Url) -> Result<Vec<u8>, NotFound> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| NotFound::new(url.as_str(), e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotFound::new(url.as_str(), format!("HTTP {status}")));
        }
        resp.bytes()
            .map(|b| b.to_vec())
            .map_err(|e| NotFound::new(url.as_str(), e))
    }
}

impl Fetch for Session {
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, NotFound> {
        if let Some(body) = self.cache.load(url) {
            debug!("cache hit: {url}");
            return Ok(body);
        }

        debug!("GET {url}");
        let body = self.get_network(url)?;

        // A cache write failure only costs a refetch next run.
        if let Err(e) = self.cache.save(url, &body) {
            debug!("cache write failed for {url}: {e}");
        }
        Ok(body)
    }
}

/// GET `url`, decode with `encoding`, parse as HTML.
pub fn fetch(session: &dyn Fetch, url: &Url, encoding: &'static Encoding) -> Result<Html, NotFound> {
    let body = session.get_bytes(url)?;
    Ok(Html::parse_document(&decode(&body, encoding)))
}

/// Decode a body with a fixed encoding, replacing malformed sequences.
/// A byte-order mark does not override `encoding`.
pub fn decode(body: &[u8], encoding: &'static Encoding) -> String {
    let (text, _) = encoding.decode_without_bom_handling(body);
    text.into_owned()
}
