// src/store.rs
//
// On-disk response cache. One file per URL under `.store/http_cache/`,
// named by the SHA-256 of the URL. Only successful bodies are stored.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use sha2::{Digest, Sha256};
use url::Url;

#[derive(Clone, Debug)]
pub struct ResponseCache {
    dir: PathBuf,
    ttl: Option<Duration>,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Option<Duration>) -> Self {
        Self { dir: dir.into(), ttl }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    fn entry_path(&self, url: &Url) -> PathBuf {
        let digest = Sha256::digest(url.as_str().as_bytes());
        self.dir.join(format!("{digest:x}"))
    }

    /// Cached body for `url`, if present and not older than the TTL.
    pub fn load(&self, url: &Url) -> Option<Vec<u8>> {
        let path = self.entry_path(url);
        if let Some(ttl) = self.ttl {
            let modified = fs::metadata(&path).and_then(|m| m.modified()).ok()?;
            let age = SystemTime::now().duration_since(modified).unwrap_or_default();
            if age > ttl {
                return None;
            }
        }
        fs::read(path).ok()
    }

    pub fn save(&self, url: &Url, body: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(url), body)
    }

    /// Drop every cached response. Missing cache dir is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
