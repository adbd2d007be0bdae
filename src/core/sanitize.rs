// src/core/sanitize.rs
use url::Url;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Last non-empty path segment of `url`, or `None` for a bare host / trailing slash.
pub fn file_name_from_url(url: &Url) -> Option<String> {
    let name = url.path_segments()?.next_back()?;
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(s!(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_ws("  A.\n  Kuchling\t(ed.) "), "A. Kuchling (ed.)");
        assert_eq!(normalize_ws("\n\n"), "");
    }

    #[test]
    fn file_name_is_last_segment() {
        let u = Url::parse("https://docs.python.org/3/archives/python-3.13-docs-pdf-a4.zip").unwrap();
        assert_eq!(file_name_from_url(&u).as_deref(), Some("python-3.13-docs-pdf-a4.zip"));

        let dir = Url::parse("https://docs.python.org/3/archives/").unwrap();
        assert_eq!(file_name_from_url(&dir), None);
    }
}
