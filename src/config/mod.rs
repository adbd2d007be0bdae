// src/config/mod.rs
pub mod consts;
pub mod options;

pub use options::{join_url, parse_url, Config};
