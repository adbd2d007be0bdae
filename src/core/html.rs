// src/core/html.rs
//
// Tag locator over a parsed `scraper::Html` tree.
// A `TagQuery` is a tag name plus attribute filters; `locate` returns the
// first descendant (document order) that matches, or fails with `TagNotFound`.

use scraper::{ElementRef, Html};

use crate::error::{Result, ScrapeError, TagNotFound};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagQuery {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl TagQuery {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), attributes: Vec::new() }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_ascii_lowercase(), s!(value)));
        self
    }

    /// Tag name must match; every filter attribute must match.
    /// `class` compares whitespace tokens: the filter's tokens must appear
    /// as a contiguous run in the element's class list.
    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let v = el.value();
        if !v.name().eq_ignore_ascii_case(&self.tag) {
            return false;
        }
        self.attributes.iter().all(|(name, want)| match v.attr(name) {
            None => false,
            Some(have) if name == "class" => class_tokens_match(have, want),
            Some(have) => have == want,
        })
    }

    fn not_found(&self) -> TagNotFound {
        TagNotFound { tag: self.tag.clone(), attributes: self.attributes.clone() }
    }
}

impl From<&str> for TagQuery {
    fn from(tag: &str) -> Self { TagQuery::new(tag) }
}

fn class_tokens_match(have: &str, want: &str) -> bool {
    let want: Vec<&str> = want.split_whitespace().collect();
    if want.is_empty() {
        return have.split_whitespace().next().is_none();
    }
    let have: Vec<&str> = have.split_whitespace().collect();
    have.windows(want.len()).any(|w| w == want.as_slice())
}

/// Something a query can be run against: a whole document or one element.
pub trait Scope<'a> {
    fn scope_root(self) -> ElementRef<'a>;
}

impl<'a> Scope<'a> for &'a Html {
    fn scope_root(self) -> ElementRef<'a> { self.root_element() }
}

impl<'a> Scope<'a> for ElementRef<'a> {
    fn scope_root(self) -> ElementRef<'a> { self }
}

/// Descendants of `root`, excluding `root` itself, in document order.
fn descendants<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// First matching descendant, or a structural fault.
pub fn locate<'a>(scope: impl Scope<'a>, query: impl Into<TagQuery>) -> Result<ElementRef<'a>, TagNotFound> {
    let query = query.into();
    descendants(scope.scope_root())
        .find(|el| query.matches(el))
        .ok_or_else(|| query.not_found())
}

/// Every matching descendant in document order. Empty is a valid answer.
pub fn locate_all<'a>(scope: impl Scope<'a>, query: impl Into<TagQuery>) -> Vec<ElementRef<'a>> {
    let query = query.into();
    descendants(scope.scope_root())
        .filter(|el| query.matches(el))
        .collect()
}

/// Attribute value, or `MissingAttribute`.
pub fn attr<'a>(el: &ElementRef<'a>, name: &str) -> Result<&'a str> {
    el.value().attr(name).ok_or_else(|| ScrapeError::MissingAttribute {
        tag: s!(el.value().name()),
        attribute: s!(name),
    })
}

/// Concatenated text of every descendant text node, untouched.
pub fn text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}
