// src/error.rs
use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Soft-fail signal from the fetcher: the page could not be obtained.
/// Covers transport faults (DNS, refused, reset, timeout) and non-2xx replies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Возникла ошибка при загрузке страницы {url}: {reason}")]
pub struct NotFound {
    pub url: String,
    pub reason: String,
}

impl NotFound {
    pub fn new(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self { url: url.into(), reason: reason.to_string() }
    }
}

/// Structural fault from the tag locator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Не найден тег {tag} {}", fmt_attrs(.attributes))]
pub struct TagNotFound {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

fn fmt_attrs(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return s!("{}");
    }
    let inner: Vec<String> = attrs.iter().map(|(k, v)| format!("{k}={v:?}")).collect();
    format!("{{{}}}", inner.join(", "))
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    PageUnavailable(#[from] NotFound),

    #[error(transparent)]
    TagNotFound(#[from] TagNotFound),

    #[error("У тега {tag} нет атрибута {attribute}")]
    MissingAttribute { tag: String, attribute: String },

    #[error("Неожиданный формат статуса: {title:?}")]
    MalformedStatus { title: String },

    #[error("Некорректный адрес {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Не удалось определить имя файла по адресу {url}")]
    NoFileName { url: String },

    #[error("Неизвестная кодировка: {0}")]
    UnknownEncoding(String),

    #[error("Строка таблицы содержит {found} полей вместо {expected}")]
    RowWidth { expected: usize, found: usize },

    #[error("Ошибка ввода-вывода ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Не удалось создать HTTP-клиент: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl ScrapeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_not_found_lists_filter() {
        let e = TagNotFound {
            tag: s!("section"),
            attributes: vec![(s!("id"), s!("numerical-index"))],
        };
        assert_eq!(e.to_string(), r#"Не найден тег section {id="numerical-index"}"#);
    }

    #[test]
    fn tag_not_found_without_filter() {
        let e = TagNotFound { tag: s!("h1"), attributes: Vec::new() };
        assert_eq!(e.to_string(), "Не найден тег h1 {}");
    }
}
