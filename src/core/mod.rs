// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{attr, locate, locate_all, text, TagQuery};
pub use net::{fetch, Fetch, Session};
