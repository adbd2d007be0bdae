// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use encoding_rs::Encoding;
use url::Url;

use super::consts::*;
use crate::error::{Result, ScrapeError};

/// Everything a run needs to know about where to fetch from and where to write.
/// Built once at startup and handed down by reference.
#[derive(Clone, Debug)]
pub struct Config {
    pub main_doc_url: Url,
    pub pep_doc_url: Url,
    pub encoding: &'static Encoding,
    pub base_dir: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    /// `None` keeps cached responses forever.
    pub cache_ttl: Option<Duration>,
    pub datetime_format: String,
}

impl Config {
    /// Defaults from `consts`, rooted at the current directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            main_doc_url: parse_url(MAIN_DOC_URL)?,
            pep_doc_url: parse_url(PEP_DOC_URL)?,
            encoding: resolve_encoding(DEFAULT_ENCODING)?,
            base_dir: PathBuf::from("."),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cache_ttl: None,
            datetime_format: s!(DATETIME_FORMAT),
        })
    }

    /// Re-root every derived directory (logs, results, downloads, cache).
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn with_main_doc_url(mut self, url: &str) -> Result<Self> {
        self.main_doc_url = parse_url(url)?;
        Ok(self)
    }

    pub fn with_pep_doc_url(mut self, url: &str) -> Result<Self> {
        self.pep_doc_url = parse_url(url)?;
        Ok(self)
    }

    pub fn with_encoding(mut self, label: &str) -> Result<Self> {
        self.encoding = resolve_encoding(label)?;
        Ok(self)
    }

    pub fn whats_new_url(&self) -> Result<Url> {
        join_url(&self.main_doc_url, WHATS_NEW_PATH)
    }

    pub fn download_page_url(&self) -> Result<Url> {
        join_url(&self.main_doc_url, DOWNLOAD_PATH)
    }

    pub fn log_dir(&self) -> PathBuf { self.base_dir.join(LOG_DIR) }
    pub fn results_dir(&self) -> PathBuf { self.base_dir.join(RESULTS_DIR) }
    pub fn downloads_dir(&self) -> PathBuf { self.base_dir.join(DOWNLOADS_DIR) }
    pub fn cache_dir(&self) -> PathBuf { self.base_dir.join(STORE_DIR).join(HTTP_CACHE_SUBDIR) }
}

pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ScrapeError::UnknownEncoding(s!(label)))
}

pub fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| ScrapeError::InvalidUrl { url: s!(raw), source })
}

/// Resolve `href` against `base` the way a browser would.
pub fn join_url(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| ScrapeError::InvalidUrl { url: s!(href), source })
}
